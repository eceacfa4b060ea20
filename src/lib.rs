//! # Hwlog - Hardware Usage Logger
//!
//! A command-line utility that observes raw keyboard and mouse input,
//! merges it into a single activity timeline and logs accumulated usage
//! durations attributed to the foreground application.
//!
//! ## Features
//!
//! - **Activity Tracking**: De-duplicated merging of keyboard and pointer
//!   event streams into one active/inactive timeline
//! - **Usage Logging**: Periodic plain-text samples of merged-active time
//! - **Foreground Attribution**: Usage windows tagged with the focused
//!   application
//! - **Background Operation**: Detached daemon with graceful shutdown
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hwlog::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
