//! Background activity monitor.
//!
//! Wires the collaborators around the [`ActivityTracker`]:
//!
//! - a dedicated OS thread runs the `rdev` listener, classifies every raw
//!   record and dispatches it into the tracker; listener failures are
//!   logged and the listener restarts after a configurable delay,
//! - a tokio interval task samples the tracker every `reset_interval`
//!   seconds, hands the sample to the usage log and then resets the
//!   accumulator (the usage-window semantic: each line reports activity
//!   since the previous one),
//! - the foreground-switch detector calls [`Monitor::on_app_switched`],
//!   which records the application path for attribution and restarts the
//!   tracker's interval clock.
//!
//! The monitor owns the only tracker instance and shares it with the
//! listener thread through an `Arc`; nothing else mutates tracker state.

use crate::libs::config::MonitorConfig;
use crate::libs::event::classify;
use crate::libs::messages::Message;
use crate::libs::tracker::ActivityTracker;
use crate::libs::usage_log::UsageLog;
use crate::{msg_debug, msg_print, msg_warning};
use anyhow::Result;
use chrono::Local;
use parking_lot::Mutex;
use rdev::{listen, Event};
use std::sync::Arc;
use std::time::Duration;
use tokio::time;

/// Hosts the tracker and its scheduling loops.
pub struct Monitor {
    pub config: MonitorConfig,
    tracker: Arc<ActivityTracker>,
    usage_log: UsageLog,
    current_app: Arc<Mutex<Option<String>>>,
}

impl Monitor {
    pub fn new(config: MonitorConfig) -> Result<Self> {
        Ok(Monitor {
            config,
            tracker: Arc::new(ActivityTracker::new()),
            usage_log: UsageLog::create()?,
            current_app: Arc::new(Mutex::new(None)),
        })
    }

    /// Shared handle to the tracker, for wiring collaborators and tests.
    pub fn tracker(&self) -> Arc<ActivityTracker> {
        self.tracker.clone()
    }

    /// Application path the current usage window is attributed to.
    pub fn current_app(&self) -> Option<String> {
        self.current_app.lock().clone()
    }

    /// Entry point for the foreground-switch detector.
    ///
    /// Records the switched-to application for log attribution and restarts
    /// the tracker's interval clock so time is attributed to the new
    /// application from this instant.
    pub fn on_app_switched(&self, app_path: &str) {
        msg_debug!(Message::AppSwitched(app_path.to_string()));
        *self.current_app.lock() = Some(app_path.to_string());
        self.tracker.on_app_switched();
    }

    /// Runs the monitor: spawns the input listener and drives the periodic
    /// sample-and-reset loop until the hosting task is cancelled.
    pub async fn run(&mut self) -> Result<()> {
        msg_print!(Message::MonitorStarted {
            reset_interval: self.config.reset_interval,
            listener_restart_delay: self.config.listener_restart_delay,
        });

        self.spawn_listener();

        let mut ticker = time::interval(Duration::from_secs(self.config.reset_interval.max(1)));
        // The first tick of a tokio interval completes immediately.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            self.flush_usage();
        }
    }

    /// Samples the tracker, appends the usage line and zeroes the window.
    ///
    /// All-idle windows are skipped to keep the log meaningful; a failed
    /// write drops the sample and keeps the monitor alive.
    fn flush_usage(&mut self) {
        let snapshot = self.tracker.sample();
        if snapshot.accumulated_ms > 0 || snapshot.keyboard_active || snapshot.pointer_active {
            let app = self.current_app.lock().clone();
            if let Err(e) = self.usage_log.append(Local::now().naive_local(), &snapshot, app.as_deref()) {
                msg_warning!(Message::UsageLogWriteFailed(e.to_string()));
            }
        }
        self.tracker.reset();
    }

    /// Spawns the input listener thread.
    ///
    /// `rdev::listen` blocks its thread for the lifetime of the listener.
    /// A listener error is not fatal: it is logged and the listener is
    /// recreated after the configured delay so monitoring continues.
    fn spawn_listener(&self) {
        let shared_tracker = self.tracker.clone();
        let restart_delay = Duration::from_millis(self.config.listener_restart_delay);
        std::thread::spawn(move || loop {
            let tracker = shared_tracker.clone();
            if let Err(e) = listen(move |event: Event| match classify(&event.event_type) {
                Some(activity) => tracker.apply(activity),
                None => msg_debug!(Message::UnclassifiedInputRecord(format!("{:?}", event.event_type))),
            }) {
                msg_warning!(Message::InputListenerFailed(format!("{:?}", e)));
                std::thread::sleep(restart_delay);
            } else {
                // rdev::listen only returns without error when the platform
                // shuts the hook down; stop the thread in that case.
                break;
            }
        });
    }
}
