//! # falsegrip_api
//!
//! HTTP API library for FalseGrip.

pub mod body;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;

use std::future::{Future, IntoFuture};

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ApiConfig;
use crate::handlers::{chat, health};
use crate::models::DatabaseStatus;

/// Application context shared by all handlers and the shutdown sequence.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool, present only when a connection string is configured.
    pub pool: Option<PgPool>,
}

impl AppState {
    /// Builds the context from configuration, creating a lazy pool if a
    /// connection string is set.
    pub fn from_config(config: &ApiConfig) -> falsegrip_core::db::Result<Self> {
        let pool = match config.database_url.as_deref() {
            Some(url) => Some(falsegrip_core::db::lazy_pool(url, config.max_connections)?),
            None => {
                warn!("DATABASE_URL is not set. Backend is running without a database connection.");
                None
            }
        };
        Ok(Self { pool })
    }

    /// Reports whether a pool was configured. Connectivity is not checked.
    pub fn database_status(&self) -> DatabaseStatus {
        if self.pool.is_some() {
            DatabaseStatus::Connected
        } else {
            DatabaseStatus::NotConfigured
        }
    }
}

/// Builds the Axum router with all routes and shared state.
///
/// Only the exact (method, path) pairs are served: `HEAD /health` and a wrong
/// method on a known path answer 404 like an unknown path. The chat body is
/// read in full with no size limit.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            routes::HEALTH,
            get(health::health_handler)
                .head(handlers::not_found)
                .fallback(handlers::not_found),
        )
        .route(
            routes::API_CHAT,
            post(chat::chat_handler)
                .fallback(handlers::not_found)
                .layer(DefaultBodyLimit::disable()),
        )
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the API on `listener` until `shutdown` resolves.
///
/// Shutdown drops the listener, closes the database pool if there is one and
/// returns without waiting for in-flight requests.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let pool = state.pool.clone();
    let app = router(state);

    tokio::select! {
        result = axum::serve(listener, app).into_future() => result?,
        () = shutdown => info!("listener closed"),
    }

    if let Some(pool) = pool {
        pool.close().await;
        info!("database pool closed");
    }

    Ok(())
}
