//! Data submission endpoint.
//!
//! `POST /api/submit` accepts either a JSON object body or URL-encoded
//! form fields, requires a key named "data", and echoes its value back.

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Submission success response
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitResponse {
    /// Always the literal `"success"`
    pub status: String,

    /// The value of the payload's "data" key, echoed verbatim
    pub received_data: Value,
}

/// Submission routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/submit", post(submit))
}

/// Accept a submission
///
/// HTTP adapter only: decodes the body into a payload mapping, logs it,
/// and delegates validation to [`handle_submit`].
async fn submit(
    State(_state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<SubmitResponse>> {
    let payload = decode_payload(&headers, &body)?;

    tracing::info!(payload = %serde_json::Value::Object(payload.clone()), "received submission");

    handle_submit(payload).map(Json)
}

/// Validate a decoded payload and build the success response
fn handle_submit(mut payload: Map<String, Value>) -> ApiResult<SubmitResponse> {
    match payload.remove("data") {
        Some(value) => Ok(SubmitResponse {
            status: "success".to_string(),
            received_data: value,
        }),
        None => Err(ApiError::MissingData),
    }
}

/// Decode the request body into a payload mapping
///
/// JSON content types are parsed as a JSON object; everything else,
/// including an absent content-type, is treated as URL-encoded form
/// data, whose values arrive as strings. An empty body therefore
/// decodes to an empty mapping, which later fails key-presence
/// validation with a 400 rather than a decode error.
fn decode_payload(headers: &HeaderMap, body: &[u8]) -> ApiResult<Map<String, Value>> {
    if is_json(headers) {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(ApiError::Internal(format!(
                "expected a JSON object, got: {other}"
            ))),
            Err(err) => Err(ApiError::Internal(err.to_string())),
        }
    } else {
        let fields: Vec<(String, String)> = serde_urlencoded::from_bytes(body)
            .map_err(|err| ApiError::Internal(err.to_string()))?;

        Ok(fields
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect())
    }
}

/// Whether the content-type header indicates a JSON body
fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| ct.split(';').next())
        .map(str::trim)
        .is_some_and(|mime| {
            mime.eq_ignore_ascii_case("application/json") || mime.to_ascii_lowercase().ends_with("+json")
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use serde_json::json;

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers
    }

    fn form_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        headers
    }

    fn payload(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn handle_submit_echoes_the_data_value() {
        for value in [
            json!("hello"),
            json!(42),
            json!(null),
            json!([1, 2, 3]),
            json!({"nested": {"deep": true}}),
        ] {
            let response = handle_submit(payload(json!({"data": value}))).unwrap();
            assert_eq!(response.status, "success");
            assert_eq!(response.received_data, value);
        }
    }

    #[test]
    fn handle_submit_rejects_missing_data_regardless_of_other_keys() {
        let err = handle_submit(payload(json!({"foo": "bar", "datum": 1}))).unwrap_err();
        assert!(matches!(err, ApiError::MissingData));

        let err = handle_submit(Map::new()).unwrap_err();
        assert!(matches!(err, ApiError::MissingData));
    }

    #[test]
    fn decode_json_object() {
        let decoded = decode_payload(&json_headers(), br#"{"data": "hello"}"#).unwrap();
        assert_eq!(decoded.get("data"), Some(&json!("hello")));
    }

    #[test]
    fn decode_json_with_charset_parameter() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        let decoded = decode_payload(&headers, br#"{"data": 1}"#).unwrap();
        assert_eq!(decoded.get("data"), Some(&json!(1)));
    }

    #[test]
    fn decode_malformed_json_is_an_internal_error() {
        let err = decode_payload(&json_headers(), b"{not json").unwrap_err();
        match err {
            ApiError::Internal(message) => assert!(!message.is_empty()),
            other => panic!("expected internal error, got {other:?}"),
        }
    }

    #[test]
    fn decode_non_object_json_is_an_internal_error() {
        let err = decode_payload(&json_headers(), b"[1, 2]").unwrap_err();
        assert!(matches!(err, ApiError::Internal(_)));
    }

    #[test]
    fn decode_form_fields_as_strings() {
        let decoded = decode_payload(&form_headers(), b"data=42&other=x").unwrap();
        assert_eq!(decoded.get("data"), Some(&json!("42")));
        assert_eq!(decoded.get("other"), Some(&json!("x")));
    }

    #[test]
    fn decode_empty_body_without_content_type_is_an_empty_mapping() {
        let decoded = decode_payload(&HeaderMap::new(), b"").unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn is_json_recognizes_suffixed_types() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/problem+json"),
        );
        assert!(is_json(&headers));
        assert!(!is_json(&form_headers()));
        assert!(!is_json(&HeaderMap::new()));
    }
}
