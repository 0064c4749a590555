//! HTTP middleware components.
//!
//! Two middleware functions run on every request: [`set_request_id`]
//! attaches a correlation ID, and [`log_requests`] records the request
//! line, status, and latency once the response is ready.

use axum::{
    body::Body,
    http::{HeaderName, Request, Response},
    middleware::Next,
};
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

/// Header carrying the per-request correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID stored in request extensions
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Attach a request ID to the request and echo it on the response
///
/// A client-provided `x-request-id` header is kept as-is; otherwise a
/// fresh UUID is generated.
pub async fn set_request_id(mut req: Request<Body>, next: Next) -> Response<Body> {
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    req.extensions_mut().insert(RequestId(request_id.clone()));

    let mut response = next.run(req).await;

    if let Ok(value) = request_id.parse() {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    response
}

/// Log each request and its outcome
pub async fn log_requests(req: Request<Body>, next: Next) -> Response<Body> {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_else(|| "unknown".to_string());

    let response = next.run(req).await;

    let status = response.status();
    let latency = start.elapsed();

    if status.is_server_error() {
        warn!(
            request_id = %request_id,
            method = %method,
            uri = %uri,
            status = %status,
            latency_ms = %latency.as_millis(),
            "request failed"
        );
    } else {
        info!(
            request_id = %request_id,
            method = %method,
            uri = %uri,
            status = %status,
            latency_ms = %latency.as_millis(),
            "request completed"
        );
    }

    response
}
