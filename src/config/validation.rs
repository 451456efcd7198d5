//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeout > 0, bind address parses)
//! - Detect duplicate feature tabs
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: DashboardConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the launch

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::DashboardConfig;

/// A single semantic problem found in the config.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("bind_address {0:?} is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("server title must not be empty")]
    EmptyTitle,

    #[error("request_timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("feature tab at index {0} has an empty name")]
    EmptyFeatureName(usize),

    #[error("duplicate feature tab {0:?}")]
    DuplicateFeature(String),
}

/// Validate a config, collecting every problem found.
pub fn validate_config(config: &DashboardConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.server.bind_address.clone(),
        ));
    }

    if config.server.title.trim().is_empty() {
        errors.push(ValidationError::EmptyTitle);
    }

    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let mut seen = Vec::new();
    for (i, feature) in config.features.iter().enumerate() {
        if feature.name.trim().is_empty() {
            errors.push(ValidationError::EmptyFeatureName(i));
            continue;
        }
        if seen.contains(&feature.name) {
            errors.push(ValidationError::DuplicateFeature(feature.name.clone()));
        } else {
            seen.push(feature.name.clone());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
