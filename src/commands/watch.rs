//! Watch command: starts, stops or foregrounds the activity monitor.

use crate::libs::daemon;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Stop the running watcher instead of starting one
    #[arg(short, long)]
    stop: bool,

    /// Run attached to the terminal instead of as a background daemon
    #[arg(short, long)]
    foreground: bool,
}

pub async fn cmd(args: WatchArgs) -> Result<()> {
    if args.stop {
        return daemon::stop();
    }

    if args.foreground {
        return daemon::run_with_signal_handling().await;
    }

    daemon::spawn()
}
