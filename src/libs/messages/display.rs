//! Display implementation for application messages.
//!
//! Converts structured [`Message`] variants into the human-readable text
//! shown in the terminal or routed to tracing. Keeping every user-facing
//! string in one match keeps wording consistent and makes message changes
//! reviewable in one place.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleMonitor => "Monitor configuration".to_string(),
            Message::PromptResetInterval => "Usage window length in seconds".to_string(),
            Message::PromptListenerRestartDelay => "Input listener restart delay in milliseconds".to_string(),

            // === MONITOR MESSAGES ===
            Message::MonitorStarted {
                reset_interval,
                listener_restart_delay,
            } => format!(
                "Monitor started (usage window: {}s, listener restart delay: {}ms)",
                reset_interval, listener_restart_delay
            ),
            Message::MonitorExitedNormally => "Monitor exited normally".to_string(),
            Message::MonitorShuttingDown => "Monitor shutting down".to_string(),
            Message::MonitorError(e) => format!("Monitor error: {}", e),
            Message::MonitorTaskPanicked(e) => format!("Monitor task panicked: {}", e),
            Message::InputListenerFailed(e) => format!("Failed to listen for input events: {}. Restarting listener", e),
            Message::AppSwitched(path) => format!("Switched to foreground app: {}", path),
            Message::UsageLogWriteFailed(e) => format!("Failed to write usage log line: {}", e),
            Message::UnclassifiedInputRecord(record) => format!("Skipped input record with no activity flag: {}", record),

            // === WATCHER/DAEMON MESSAGES ===
            Message::WatcherStarted(pid) => format!("Watcher started in background with PID: {}", pid),
            Message::WatcherStopped(pid) => format!("Watcher process {} stopped", pid),
            Message::WatcherNotRunning => "Watcher is not running".to_string(),
            Message::WatcherNotRunningPidNotFound => "Watcher is not running (PID file not found)".to_string(),
            Message::WatcherStoppingExisting(pid) => format!("Stopping existing watcher with PID: {}", pid),
            Message::WatcherFailedToStopExisting(e) => format!("Failed to stop existing watcher: {}", e),
            Message::WatcherFailedToStop(pid) => format!("Failed to stop watcher process {}", pid),
            Message::WatcherReceivedSigterm => "Received SIGTERM, shutting down gracefully".to_string(),
            Message::WatcherReceivedSigint => "Received SIGINT, shutting down gracefully".to_string(),
            Message::WatcherReceivedCtrlC => "Received Ctrl+C, shutting down gracefully".to_string(),
            Message::WatcherCtrlCListenFailed(e) => format!("Failed to listen for Ctrl+C: {}", e),
            Message::WatcherSignalHandlingNotSupported => "Signal handling is not supported on this platform".to_string(),
            Message::DaemonModeNotSupported => "Daemon mode is not supported on this platform".to_string(),
            Message::InvalidPidFileContent => "PID file contains invalid content".to_string(),
            Message::FailedToGetCurrentExecutable => "Failed to get current executable path".to_string(),
            Message::FailedToCreateSigtermHandler => "Failed to create SIGTERM handler".to_string(),
            Message::FailedToCreateSigintHandler => "Failed to create SIGINT handler".to_string(),
            Message::FailedToOpenProcess(code) => format!("Failed to open process (OS error {})", code),
            Message::FailedToTerminateProcess(code) => format!("Failed to terminate process (OS error {})", code),
            Message::ProcessTerminationNotSupported => "Process termination is not supported on this platform".to_string(),
        };
        write!(f, "{}", text)
    }
}
