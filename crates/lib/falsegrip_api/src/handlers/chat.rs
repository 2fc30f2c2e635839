//! Chat endpoint.

use tracing::debug;

use crate::body::JsonBody;
use crate::error::AppError;

/// `POST /api/chat` — accepts any JSON body and answers 501.
pub async fn chat_handler(JsonBody(body): JsonBody) -> AppError {
    debug!(
        fields = body.as_object().map_or(0, |map| map.len()),
        "chat request received"
    );
    AppError::NotImplemented
}
