//! Application builder and configuration.
//!
//! This module provides the main application builder that assembles
//! all routes, middleware, and state into an Axum router.

use crate::{
    config::ApiConfig,
    middleware::{log_requests, set_request_id},
    routes,
    state::AppState,
};
use axum::{middleware::from_fn, Router};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Create the main application router
pub fn create_app(config: ApiConfig) -> Router {
    let timeout = config.request_timeout();

    // Create application state
    let state = AppState::new(config);

    // Build the router
    Router::new()
        // Status and health routes
        .merge(routes::home::routes())
        .merge(routes::health::routes())
        // API routes
        .nest("/api", routes::submit::routes())
        // Add state
        .with_state(state)
        // Add middleware layers
        .layer(
            ServiceBuilder::new()
                // Tracing
                .layer(TraceLayer::new_for_http())
                // Compression
                .layer(CompressionLayer::new())
                // CORS
                .layer(cors_layer())
                // Timeout
                .layer(TimeoutLayer::new(timeout))
                // Custom middleware
                .layer(from_fn(set_request_id))
                .layer(from_fn(log_requests)),
        )
}

/// Build the CORS layer
///
/// The API is consumed by browser frontends served from arbitrary
/// origins, so cross-origin requests are unrestricted.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
