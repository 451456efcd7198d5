//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! dashboard.toml (working directory)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → DashboardConfig (validated, immutable)
//!     → handed to the dashboard entry point by the launcher
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; each process run loads it once
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - A load failure of any kind aborts the launch

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{DashboardConfig, FeatureConfig, ServerConfig};
