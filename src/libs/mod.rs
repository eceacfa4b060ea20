//! Core library modules for the hwlog application.
//!
//! ## Features
//!
//! - **Activity Tracking**: Event classification and merged interval
//!   accounting for keyboard and pointer input
//! - **Monitoring**: Input listener wiring, periodic usage sampling,
//!   daemon lifecycle
//! - **Core Infrastructure**: Configuration, data storage paths, messaging

pub mod config;
pub mod daemon;
pub mod data_storage;
pub mod event;
pub mod messages;
pub mod monitor;
pub mod tracker;
pub mod usage_log;
