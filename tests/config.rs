#[cfg(test)]
mod tests {
    use hwlog::libs::config::{Config, MonitorConfig};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Test context to ensure a clean environment for each config test.
    /// It sets up a temporary directory to act as the user's home/appdata
    /// directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        reset_interval: u64,
        listener_restart_delay: u64,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            // Mock the home/appdata directory for cross-platform compatibility.
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _temp_dir: temp_dir,
                reset_interval: 45,
                listener_restart_delay: 250,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.monitor.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_monitor_defaults(_ctx: &mut ConfigTestContext) {
        let monitor = MonitorConfig::default();
        assert_eq!(monitor.reset_interval, 10);
        assert_eq!(monitor.listener_restart_delay, 1000);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        // When no config file exists, read() should return the default config.
        let config = Config::read().unwrap();
        assert!(config.monitor.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            monitor: Some(MonitorConfig {
                reset_interval: ctx.reset_interval,
                listener_restart_delay: ctx.listener_restart_delay,
            }),
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        let monitor_config = read_config.monitor.unwrap();
        assert_eq!(monitor_config.reset_interval, ctx.reset_interval);
        assert_eq!(monitor_config.listener_restart_delay, ctx.listener_restart_delay);
    }
}
