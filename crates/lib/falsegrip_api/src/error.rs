//! Application error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::body::BodyError;
use crate::models::ErrorResponse;
use crate::response;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
///
/// The display text is the `error` field of the response body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid JSON body.")]
    InvalidJsonBody,

    #[error("Could not read request body.")]
    BodyUnreadable(StatusCode),

    #[error("Not found.")]
    NotFound,

    #[error("Not implemented yet.")]
    NotImplemented,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidJsonBody => StatusCode::BAD_REQUEST,
            AppError::BodyUnreadable(status) => *status,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::NotImplemented => StatusCode::NOT_IMPLEMENTED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        response::json(self.status(), &body)
    }
}

impl From<BodyError> for AppError {
    fn from(_: BodyError) -> Self {
        AppError::InvalidJsonBody
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(AppError::InvalidJsonBody.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::NotImplemented.status(),
            StatusCode::NOT_IMPLEMENTED
        );
        assert_eq!(
            AppError::BodyUnreadable(StatusCode::PAYLOAD_TOO_LARGE).status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }

    #[test]
    fn body_errors_surface_as_invalid_json() {
        let err = crate::body::parse_json_body(b"null").unwrap_err();
        assert!(matches!(AppError::from(err), AppError::InvalidJsonBody));
    }
}
