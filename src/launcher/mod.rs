//! Launch orchestration subsystem.
//!
//! # Data Flow
//! ```text
//! Launcher::launch(entry)
//!     → banner.rs (fixed startup lines to stdout)
//!     → config loader (dashboard.toml at a fixed relative path)
//!     → phase: NotStarted → Running
//!     → entry(config).await (control transfers to the dashboard)
//! ```
//!
//! # Design Decisions
//! - Banner prints before any filesystem access
//! - Single-shot and fail fast: no retry, no recovery, no partial launch
//! - The dashboard is an explicit entry point with a typed Result, not
//!   an opaque inclusion; its errors propagate unmodified
//! - No Stopped phase: termination is an external signal or an error

pub mod banner;

use std::future::Future;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::loader::{load_config, ConfigError};
use crate::config::DashboardConfig;
use crate::dashboard::DashboardError;

/// Fixed relative path of the dashboard's configuration file. The
/// launcher expects it to exist in the working directory at launch time.
pub const DASHBOARD_CONFIG_PATH: &str = "dashboard.toml";

/// Errors that can surface during launch.
///
/// This is the single taxonomy for every launch failure: the config
/// file being missing, unreadable, or invalid, and any error raised by
/// the dashboard entry point itself.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Loading the dashboard config failed (missing, unreadable, or
    /// invalid file). Raised before the entry point is invoked.
    #[error("failed to load dashboard config: {0}")]
    Config(#[from] ConfigError),

    /// The dashboard entry point returned an error.
    #[error(transparent)]
    Dashboard(#[from] DashboardError),
}

/// Launch lifecycle phase.
///
/// Two phases only: `Running` is entered once control transfers to the
/// dashboard entry point and is never left from inside the launcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchPhase {
    NotStarted,
    Running,
}

/// Single-shot launcher for the dashboard service.
pub struct Launcher {
    config_path: PathBuf,
    phase: LaunchPhase,
}

impl Launcher {
    /// Create a launcher reading config from [`DASHBOARD_CONFIG_PATH`].
    pub fn new() -> Self {
        Self::with_config_path(DASHBOARD_CONFIG_PATH)
    }

    /// Create a launcher reading config from a custom path.
    pub fn with_config_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            phase: LaunchPhase::NotStarted,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> LaunchPhase {
        self.phase
    }

    /// Path the launcher will load the dashboard config from.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Print the banner, load the config, and hand control to `entry`.
    ///
    /// Blocks until the entry point returns, which for the real
    /// dashboard means an external interrupt or a server error. Any
    /// failure is returned unmodified as a [`LaunchError`]. After a
    /// successful handoff [`phase`](Self::phase) reports `Running`; a
    /// failed config load leaves it at `NotStarted`.
    pub async fn launch<F, Fut>(&mut self, entry: F) -> Result<(), LaunchError>
    where
        F: FnOnce(DashboardConfig) -> Fut,
        Fut: Future<Output = Result<(), DashboardError>>,
    {
        banner::print_banner();

        let config = load_config(&self.config_path)?;
        tracing::info!(
            config_path = %self.config_path.display(),
            bind_address = %config.server.bind_address,
            features = config.features.len(),
            "Configuration loaded"
        );

        self.phase = LaunchPhase::Running;
        tracing::debug!(phase = ?self.phase, "Control transferring to dashboard entry point");

        entry(config).await?;
        Ok(())
    }
}

impl Default for Launcher {
    fn default() -> Self {
        Self::new()
    }
}
