//! # falsegrip_core
//!
//! Core domain logic for FalseGrip: the chat screen state, its render model,
//! and database pool setup for the backend.

pub mod chat;
pub mod db;
pub mod id;
pub mod render;

/// FalseGrip release version, shared by every crate in the workspace.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
