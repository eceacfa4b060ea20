#[cfg(test)]
mod tests {
    use hwlog::libs::config::MonitorConfig;
    use hwlog::libs::monitor::Monitor;
    use rdev::Key;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Test context for monitor tests. Redirects the data directory (usage
    /// log, config) into a temporary directory.
    struct MonitorTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for MonitorTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            MonitorTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(MonitorTestContext)]
    #[test]
    fn test_monitor_shares_one_tracker(_ctx: &mut MonitorTestContext) {
        let monitor = Monitor::new(MonitorConfig::default()).unwrap();

        // Collaborators wired through the handle see the same state.
        monitor.tracker().on_key_down(Key::KeyA);
        assert!(monitor.tracker().is_keyboard_active());
        assert_eq!(monitor.tracker().keys_down(), 1);

        monitor.tracker().on_key_up(Key::KeyA);
        assert!(!monitor.tracker().is_keyboard_active());
    }

    #[test_context(MonitorTestContext)]
    #[test]
    fn test_app_switch_records_attribution_and_restarts_clock(_ctx: &mut MonitorTestContext) {
        let monitor = Monitor::new(MonitorConfig::default()).unwrap();
        assert_eq!(monitor.current_app(), None);

        monitor.on_app_switched("/usr/bin/firefox");
        assert_eq!(monitor.current_app(), Some("/usr/bin/firefox".to_string()));

        // The switch opened the tracker interval, so the first key down
        // afterwards does not open a new one.
        assert!(!monitor.tracker().on_key_down(Key::KeyA));
        monitor.tracker().on_key_up(Key::KeyA);

        monitor.on_app_switched("/usr/bin/alacritty");
        assert_eq!(monitor.current_app(), Some("/usr/bin/alacritty".to_string()));
    }
}
