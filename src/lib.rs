//! Trends Dashboard Service Launcher
//!
//! A fail-fast launcher for the trends dashboard web service.
//!
//! # Architecture Overview
//!
//! ```text
//!   process start
//!       → launcher (print banner to stdout)
//!       → config   (load dashboard.toml from the working directory)
//!       → dashboard::run (bind listener, serve until CTRL+C)
//!
//!   any failure propagates unmodified to main() → non-zero exit
//! ```
//!
//! The launcher never recovers or retries: a missing config file, an
//! unreadable or invalid config file, or an error inside the dashboard
//! all surface directly at the process boundary.

pub mod config;
pub mod dashboard;
pub mod launcher;

pub use config::schema::DashboardConfig;
pub use dashboard::DashboardServer;
pub use launcher::{LaunchError, LaunchPhase, Launcher};
