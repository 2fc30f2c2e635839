//! Request handlers.

pub mod chat;
pub mod health;

use crate::error::AppError;

/// Fallback for unknown paths and unsupported methods.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
