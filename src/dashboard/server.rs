//! HTTP server for the dashboard.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (tracing, request timeout)
//! - Serve the landing page and health probe
//! - Run until CTRL+C with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{DashboardConfig, FeatureConfig};
use crate::dashboard::DashboardError;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub title: Arc<str>,
    pub features: Arc<[FeatureConfig]>,
}

/// HTTP server for the dashboard service.
pub struct DashboardServer {
    router: Router,
}

impl DashboardServer {
    /// Create a new server from the loaded configuration.
    pub fn new(config: DashboardConfig) -> Self {
        let state = AppState {
            title: config.server.title.clone().into(),
            features: config.features.clone().into(),
        };

        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &DashboardConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(landing_handler))
            .route("/healthz", get(health_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// The router, for in-process testing without a listener.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), DashboardError> {
        let addr = listener.local_addr().map_err(DashboardError::Serve)?;
        tracing::info!(
            address = %addr,
            "Dashboard server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(DashboardError::Serve)?;

        tracing::info!("Dashboard server stopped");
        Ok(())
    }
}

/// Landing page: the dashboard shell naming the configured feature tabs.
async fn landing_handler(State(state): State<AppState>) -> impl IntoResponse {
    let tabs: String = state
        .features
        .iter()
        .map(|f| format!("    <li><strong>{}</strong>: {}</li>\n", f.name, f.description))
        .collect();

    Html(format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{title}</title></head>\n<body>\n\
         <h1>{title}</h1>\n  <ul>\n{tabs}  </ul>\n</body>\n</html>\n",
        title = state.title,
        tabs = tabs,
    ))
}

/// Liveness probe.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
