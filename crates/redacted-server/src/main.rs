// Main entry point for the redacted text service

use std::sync::Arc;

use anyhow::{Context, Result};
use redacted_engine::RedactionPipeline;
use redacted_server::app::build_app;
use redacted_server::config::ServerConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,redacted_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting redacted text service");

    let config = ServerConfig::from_env().context("Failed to load configuration")?;

    // A broken pattern table must stop the deployment here, before the
    // service takes traffic.
    let pipeline = RedactionPipeline::new().context("Failed to initialize pattern library")?;
    tracing::info!("Pattern library initialized");

    let app = build_app(Arc::new(pipeline));

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Discovery endpoint: http://{}/discover", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
