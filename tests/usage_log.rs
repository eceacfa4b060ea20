#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use hwlog::libs::tracker::ActivitySnapshot;
    use hwlog::libs::usage_log::UsageLog;

    fn sample_time() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 7, 14).unwrap().and_hms_opt(9, 23, 10).unwrap()
    }

    #[test]
    fn test_append_writes_one_line_per_sample() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("usage.log");
        let mut log = UsageLog::open(&path).unwrap();

        let snapshot = ActivitySnapshot {
            accumulated_ms: 4320,
            keyboard_active: false,
            pointer_active: true,
        };
        log.append(sample_time(), &snapshot, Some("/usr/bin/firefox")).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "2025-07-14 09:23:10\t4320\tkeyboard=idle\tpointer=active\t/usr/bin/firefox\n"
        );
    }

    #[test]
    fn test_append_without_app_uses_placeholder() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("usage.log");
        let mut log = UsageLog::open(&path).unwrap();

        let snapshot = ActivitySnapshot {
            accumulated_ms: 150,
            keyboard_active: true,
            pointer_active: false,
        };
        log.append(sample_time(), &snapshot, None).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "2025-07-14 09:23:10\t150\tkeyboard=active\tpointer=idle\t-\n");
    }

    #[test]
    fn test_append_accumulates_lines() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("usage.log");

        let snapshot = ActivitySnapshot {
            accumulated_ms: 10,
            keyboard_active: false,
            pointer_active: false,
        };

        {
            let mut log = UsageLog::open(&path).unwrap();
            log.append(sample_time(), &snapshot, None).unwrap();
        }
        // Reopening must append, not truncate.
        {
            let mut log = UsageLog::open(&path).unwrap();
            log.append(sample_time(), &snapshot, None).unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }
}
