//! Health check endpoint.

use crate::{state::AppState, SERVICE_NAME};
use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service name
    pub service: String,
}

/// Health check routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// Basic health check
///
/// The service has no dependencies to probe, so a reachable process is
/// a healthy one.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}
