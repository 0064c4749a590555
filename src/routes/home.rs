//! Root status endpoint.

use crate::{state::AppState, SERVICE_NAME};
use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};

/// Root status response
#[derive(Debug, Serialize, Deserialize)]
pub struct HomeResponse {
    /// Human-readable status message
    pub message: String,

    /// Service name
    pub service: String,

    /// Service version
    pub version: String,
}

/// Root route
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(home))
}

/// Root status message
///
/// The message text is kept byte-for-byte compatible with the previous
/// backend so frontends that display it are unaffected.
async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "Flask backend is running 🚀".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
