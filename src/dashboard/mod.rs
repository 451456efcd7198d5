//! Dashboard service subsystem.
//!
//! # Data Flow
//! ```text
//! DashboardConfig (from the launcher)
//!     → run() (bind TCP listener on the configured address)
//!     → server.rs (Axum router: landing page, health probe)
//!     → serve until CTRL+C or a server error
//! ```
//!
//! The launcher treats this module as an opaque collaborator behind the
//! `run` entry point: it passes the config in and gets a typed Result
//! back. Everything behind the entry point is the dashboard's own
//! concern.

pub mod server;

use thiserror::Error;

use tokio::net::TcpListener;

use crate::config::DashboardConfig;

pub use server::DashboardServer;

/// Errors raised by the dashboard service.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Binding the configured address failed.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    /// The HTTP server failed while serving.
    #[error("dashboard server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Dashboard entry point.
///
/// Binds the configured address and serves until an external interrupt
/// or an unrecoverable server error.
pub async fn run(config: DashboardConfig) -> Result<(), DashboardError> {
    let addr = config.server.bind_address.clone();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| DashboardError::Bind { addr, source })?;

    DashboardServer::new(config).run(listener).await
}
