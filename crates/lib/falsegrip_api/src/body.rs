//! Request body reader.
//!
//! The whole body is buffered before it is parsed. An empty or whitespace-only
//! body reads as an empty object rather than an error. Invalid UTF-8 is
//! replaced, not rejected.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

use crate::error::AppError;

/// Reasons a non-empty body is rejected.
#[derive(Debug, Error)]
pub enum BodyError {
    #[error("body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("body parses to an empty value: {0}")]
    Empty(Value),
}

/// Parses a fully buffered body into a JSON value.
///
/// `null`, `false`, `0` and `""` parse but carry nothing, so they are
/// rejected like malformed input.
pub fn parse_json_body(bytes: &[u8]) -> Result<Value, BodyError> {
    let text = String::from_utf8_lossy(bytes);
    if text.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    let value: Value = serde_json::from_str(&text)?;
    if is_empty_value(&value) {
        return Err(BodyError::Empty(value));
    }
    Ok(value)
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Extractor yielding the request body as parsed JSON.
///
/// Unlike `axum::Json` it ignores `Content-Type` and accepts an empty body.
#[derive(Debug, Clone)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            warn!("failed to read request body: {}", rejection.body_text());
            AppError::BodyUnreadable(rejection.status())
        })?;

        parse_json_body(&bytes).map(JsonBody).map_err(|e| {
            warn!("rejecting request body: {e}");
            AppError::from(e)
        })
    }
}
