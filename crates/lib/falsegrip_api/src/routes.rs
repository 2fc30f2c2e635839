//! Route paths.

/// `GET` — service liveness and database configuration.
pub const HEALTH: &str = "/health";

/// `POST` — chat endpoint.
pub const API_CHAT: &str = "/api/chat";
