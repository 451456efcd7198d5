//! Trends Dashboard Service Launcher (binary)
//!
//! Prints the startup banner, loads `dashboard.toml` from the working
//! directory, then hands control to the dashboard entry point. No
//! command-line flags or arguments are consumed.
//!
//! Fail fast: any error from launch propagates out of `main`, printing
//! a diagnostic and exiting with a non-zero code.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trends_dashboard::{dashboard, Launcher};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trends_dashboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("trends-dashboard v0.1.0 starting");

    Launcher::new().launch(dashboard::run).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
