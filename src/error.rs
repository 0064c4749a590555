//! HTTP error handling and conversion.
//!
//! Request handling returns [`ApiResult`] values; this module maps them
//! to HTTP status codes and the `{"status": "error", "message": ...}`
//! envelope the API speaks.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// API-specific error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// The submitted payload lacks the required "data" key
    #[error("Missing 'data' field")]
    MissingData,

    /// Unexpected failure while decoding or handling a request
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingData => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Standardized error response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always the literal `"error"`
    pub status: String,

    /// Human-readable message
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(%message, "request handling failed");
        }

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
