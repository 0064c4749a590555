//! Backend status and submission API.
//!
//! This crate provides a small Axum-based HTTP backend exposing three
//! routes: a root status message, a health check, and a data submission
//! endpoint that validates a JSON or form payload and echoes it back.
//!
//! ## Architecture
//!
//! The crate is organized into the following modules:
//!
//! - **app**: Application builder assembling routes, state, and middleware
//! - **routes**: HTTP route handlers, one module per route family
//! - **middleware**: Request ID and request/response logging middleware
//! - **error**: HTTP error handling and conversion
//!
//! ## Usage
//!
//! ```rust,no_run
//! use backend_api::{create_app, ApiConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ApiConfig::from_env().expect("Failed to load config");
//!     let app = create_app(config.clone());
//!
//!     let listener = tokio::net::TcpListener::bind(config.server_address())
//!         .await
//!         .expect("Failed to bind");
//!
//!     axum::serve(listener, app)
//!         .await
//!         .expect("Server error");
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

/// Service name reported in every response envelope.
pub const SERVICE_NAME: &str = "backend";

// Re-export commonly used types
pub use app::create_app;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
