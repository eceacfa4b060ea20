#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleMonitor,
    PromptResetInterval,
    PromptListenerRestartDelay,

    // === MONITOR MESSAGES ===
    MonitorStarted {
        reset_interval: u64,
        listener_restart_delay: u64,
    },
    MonitorExitedNormally,
    MonitorShuttingDown,
    MonitorError(String),
    MonitorTaskPanicked(String),
    InputListenerFailed(String),     // error
    AppSwitched(String),             // application path
    UsageLogWriteFailed(String),     // error
    UnclassifiedInputRecord(String), // raw record

    // === WATCHER/DAEMON MESSAGES ===
    WatcherStarted(u32), // PID
    WatcherStopped(u32), // PID
    WatcherNotRunning,
    WatcherNotRunningPidNotFound,
    WatcherStoppingExisting(String),     // PID
    WatcherFailedToStopExisting(String), // error
    WatcherFailedToStop(u32),            // PID
    WatcherReceivedSigterm,
    WatcherReceivedSigint,
    WatcherReceivedCtrlC,
    WatcherCtrlCListenFailed(String), // error
    WatcherSignalHandlingNotSupported,
    DaemonModeNotSupported,
    InvalidPidFileContent,
    FailedToGetCurrentExecutable,
    FailedToCreateSigtermHandler,
    FailedToCreateSigintHandler,
    FailedToOpenProcess(u32),      // OS error code
    FailedToTerminateProcess(u32), // OS error code
    ProcessTerminationNotSupported,
}
