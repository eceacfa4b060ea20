use hwlog::commands::Cli;
use hwlog::libs::daemon;
use hwlog::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .init();
    }

    // The background child is respawned with this flag and bypasses the CLI.
    if std::env::args().any(|arg| arg == "--daemon-run") {
        return daemon::run_with_signal_handling().await;
    }

    Cli::menu().await
}
