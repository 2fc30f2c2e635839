//! JSON response construction.

use axum::body::Body;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

const FALLBACK_BODY: &str = r#"{"error":"Internal server error."}"#;

/// Serializes `payload` and sets `Content-Type` and an exact `Content-Length`.
pub fn json<T: Serialize>(status: StatusCode, payload: &T) -> Response {
    match serde_json::to_vec(payload) {
        Ok(bytes) => with_body(status, bytes),
        Err(e) => {
            error!("failed to serialize response: {e}");
            with_body(StatusCode::INTERNAL_SERVER_ERROR, FALLBACK_BODY.into())
        }
    }
}

fn with_body(status: StatusCode, bytes: Vec<u8>) -> Response {
    let length = HeaderValue::from(bytes.len());
    (
        status,
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            ),
            (header::CONTENT_LENGTH, length),
        ],
        Body::from(bytes),
    )
        .into_response()
}
