//! Message identifiers.
//!
//! Sent messages get a UUIDv7, which sorts by creation time and stays unique
//! when several messages are sent within the same millisecond.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed id of the greeting shown when a chat screen opens.
pub const WELCOME_ID: &str = "welcome";

/// Unique identifier of a transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    /// Generate a new timestamp-sortable id.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// The id reserved for the welcome message.
    pub fn welcome() -> Self {
        Self(WELCOME_ID.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
