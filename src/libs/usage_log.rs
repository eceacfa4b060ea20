//! Plain-text persistence sink for sampled usage durations.
//!
//! The sink owns the log file and formatting; the tracker itself never
//! writes anything. One line is appended per sampled window:
//!
//! ```text
//! 2025-07-14 09:23:10	4320	keyboard=idle	pointer=active	/usr/bin/firefox
//! ```
//!
//! Fields are tab-separated: local timestamp, accumulated merged-active
//! milliseconds for the window, the two device flags at sampling time, and
//! the foreground application the window is attributed to (`-` when none
//! was ever reported).

use crate::libs::data_storage::DataStorage;
use crate::libs::tracker::ActivitySnapshot;
use anyhow::Result;
use chrono::NaiveDateTime;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const USAGE_LOG_FILE_NAME: &str = "usage.log";

/// Failures while appending to the usage log. None of these stop the
/// monitor; a failed write is logged and the sample is dropped.
#[derive(Debug, thiserror::Error)]
pub enum UsageLogError {
    #[error("failed to open usage log {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to append to usage log: {0}")]
    Write(#[from] std::io::Error),
}

/// Append-only writer for the usage log.
pub struct UsageLog {
    file: File,
}

impl UsageLog {
    /// Opens (or creates) the usage log in the application data directory.
    pub fn create() -> Result<Self> {
        let path = DataStorage::new().get_path(USAGE_LOG_FILE_NAME)?;
        Ok(Self::open(&path)?)
    }

    /// Opens a usage log at an explicit path.
    pub fn open(path: &Path) -> Result<Self, UsageLogError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| UsageLogError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self { file })
    }

    /// Appends one sampled window as a text line and flushes it.
    pub fn append(&mut self, at: NaiveDateTime, snapshot: &ActivitySnapshot, app: Option<&str>) -> Result<(), UsageLogError> {
        writeln!(
            self.file,
            "{}\t{}\t{}\t{}\t{}",
            at.format("%Y-%m-%d %H:%M:%S"),
            snapshot.accumulated_ms,
            flag("keyboard", snapshot.keyboard_active),
            flag("pointer", snapshot.pointer_active),
            app.unwrap_or("-"),
        )?;
        self.file.flush()?;
        Ok(())
    }
}

fn flag(device: &str, active: bool) -> String {
    format!("{}={}", device, if active { "active" } else { "idle" })
}
