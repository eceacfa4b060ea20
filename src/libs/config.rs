//! Configuration management.
//!
//! Settings live as JSON in the platform application data directory and are
//! edited either by hand or through the interactive `init` wizard. The only
//! configurable module today is the activity monitor; it stays optional so
//! a missing file or an empty config still runs with defaults.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Activity monitor settings.
///
/// The reset cadence defines the usage window: every `reset_interval`
/// seconds the accumulated merged-active duration is sampled into the usage
/// log and then zeroed, so each log line reports usage since the previous
/// line. The cadence is assumed to be at least as long as the smallest
/// duration worth reporting.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MonitorConfig {
    /// Usage window length in seconds between samples of the accumulator.
    pub reset_interval: u64,

    /// Delay in milliseconds before restarting a failed input listener.
    pub listener_restart_delay: u64,
}

impl Default for MonitorConfig {
    /// Defaults: a 10 second usage window, matching the granularity the
    /// usage log is meant for, and a 1 second back-off before the input
    /// listener is restarted after an error.
    fn default() -> Self {
        MonitorConfig {
            reset_interval: 10,
            listener_restart_delay: 1000,
        }
    }
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Activity monitoring configuration; `None` means defaults.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor: Option<MonitorConfig>,
}

impl Config {
    /// Reads the configuration file, falling back to defaults when no file
    /// exists yet. A file that exists but cannot be parsed is an error.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive configuration wizard.
    ///
    /// Prompts for the monitor settings with the current values (or
    /// defaults) pre-filled, and returns the updated configuration for
    /// saving.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.monitor.clone().unwrap_or_default();

        msg_print!(Message::ConfigModuleMonitor);
        config.monitor = Some(MonitorConfig {
            reset_interval: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptResetInterval.to_string())
                .default(default.reset_interval)
                .interact_text()?,

            listener_restart_delay: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptListenerRestartDelay.to_string())
                .default(default.listener_restart_delay)
                .interact_text()?,
        });

        Ok(config)
    }
}
