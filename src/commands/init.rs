//! Application configuration initialization command.
//!
//! Runs the interactive setup wizard that collects the monitor settings
//! and writes them to the configuration file.

use crate::libs::{config::Config, messages::Message};
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating a new one
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        let config_path = crate::libs::data_storage::DataStorage::new().get_path(crate::libs::config::CONFIG_FILE_NAME)?;
        if config_path.exists() {
            std::fs::remove_file(config_path)?;
        }
        return Ok(());
    }

    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
