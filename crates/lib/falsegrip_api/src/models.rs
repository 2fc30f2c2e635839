//! Response payloads.

use serde::{Deserialize, Serialize};

/// Whether the backend was started with a database connection string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatabaseStatus {
    Connected,
    NotConfigured,
}

/// `GET /health` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: DatabaseStatus,
}

impl HealthResponse {
    pub fn ok(database: DatabaseStatus) -> Self {
        Self {
            status: "ok".into(),
            database,
        }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
