//! Application setup.

use std::sync::Arc;

use axum::{routing::get, Router};
use redacted_engine::RedactionPipeline;
use tower_http::trace::TraceLayer;

use crate::routes::{discover_handler, health_handler, redact_get, redact_post};

/// Shared application state: the pipeline is stateless per call, so
/// one instance serves all requests concurrently.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<RedactionPipeline>,
}

/// Build the router with all routes and middleware.
pub fn build_app(pipeline: Arc<RedactionPipeline>) -> Router {
    let state = AppState { pipeline };

    Router::new()
        .route("/", get(redact_get).post(redact_post))
        .route("/discover", get(discover_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
