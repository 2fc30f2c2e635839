//! PostgreSQL pool setup.
//!
//! The backend only records whether a pool exists. The pool is created lazily
//! so startup never waits on, or fails because of, an unreachable server.

use sqlx::postgres::{PgPool, PgPoolOptions};
use thiserror::Error;

/// Default pool size.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Errors that can occur while preparing the database pool.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),
}

/// Result type for database operations.
pub type Result<T> = std::result::Result<T, DbError>;

/// Picks the connection string from `DATABASE_URL`, falling back to `POSTGRES_URL`.
///
/// Blank values count as unset.
pub fn resolve_database_url(
    database_url: Option<String>,
    postgres_url: Option<String>,
) -> Option<String> {
    [database_url, postgres_url]
        .into_iter()
        .flatten()
        .map(|url| url.trim().to_string())
        .find(|url| !url.is_empty())
}

/// Builds a pool that opens connections on first use.
///
/// Only the connection string is validated here.
pub fn lazy_pool(url: &str, max_connections: u32) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_lazy(url)?;
    log::info!("database pool configured (max_connections={max_connections})");
    Ok(pool)
}
