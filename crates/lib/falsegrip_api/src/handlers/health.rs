//! Health check endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;

use crate::AppState;
use crate::models::HealthResponse;
use crate::response;

/// `GET /health` — reports liveness and whether a database is configured.
///
/// No query is issued; `connected` only means a pool exists.
pub async fn health_handler(State(state): State<AppState>) -> Response {
    response::json(StatusCode::OK, &HealthResponse::ok(state.database_status()))
}
