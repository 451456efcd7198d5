//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from the config
//! file. Defaults describe the stock dashboard: port 8051 and the three
//! feature tabs named in the startup banner.

use serde::{Deserialize, Serialize};

/// Root configuration for the dashboard service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// HTTP server settings (bind address, timeouts).
    pub server: ServerConfig,

    /// Feature tabs exposed on the dashboard landing page.
    pub features: Vec<FeatureConfig>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            features: default_features(),
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8051").
    pub bind_address: String,

    /// Title shown on the landing page.
    pub title: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8051".to_string(),
            title: "Trends Dashboard".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// A feature tab on the dashboard.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeatureConfig {
    /// Tab name (unique).
    pub name: String,

    /// One-line description shown next to the tab.
    pub description: String,
}

fn default_features() -> Vec<FeatureConfig> {
    vec![
        FeatureConfig {
            name: "Overview".to_string(),
            description: "Trend analysis with search interest data".to_string(),
        },
        FeatureConfig {
            name: "Trends".to_string(),
            description: "State-wise analysis & blog reports".to_string(),
        },
        FeatureConfig {
            name: "Reports".to_string(),
            description: "Multi-timeframe comprehensive analysis".to_string(),
        },
    ]
}
