//! FalseGrip backend server binary.
//!
//! Serves the health and chat routes until SIGINT or SIGTERM, then closes the
//! database pool and exits with status 0.

use std::net::{IpAddr, Ipv4Addr};

use clap::Parser;
use falsegrip_api::config::{ApiConfig, DEFAULT_PORT};
use falsegrip_core::db::DEFAULT_MAX_CONNECTIONS;
use tracing::{info, warn};

/// CLI arguments for the backend server.
#[derive(Parser, Debug)]
#[command(name = "falsegrip_server", about = "FalseGrip backend server", version)]
struct Args {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Address to listen on.
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    host: IpAddr,

    /// PostgreSQL connection URL.
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    /// PostgreSQL connection URL used when `DATABASE_URL` is unset.
    #[arg(long, env = "POSTGRES_URL", hide_env_values = true)]
    postgres_url: Option<String>,

    /// Maximum number of database connections in the pool.
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    max_connections: u32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,falsegrip_api=debug,falsegrip_core=debug"
                    .parse()
                    .unwrap()
            }),
        )
        .init();

    let args = Args::parse();

    let config = ApiConfig::new(
        args.host,
        args.port,
        args.database_url,
        args.postgres_url,
        args.max_connections,
    );

    info!(
        addr = %config.bind_addr,
        database = config.database_url.is_some(),
        "starting falsegrip_server"
    );

    let state = falsegrip_api::AppState::from_config(&config)?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    let local_addr = listener.local_addr()?;
    info!("Backend listening on http://{local_addr}");

    falsegrip_api::serve(listener, state, shutdown_signal()).await?;

    info!("falsegrip_server stopped");
    Ok(())
}

/// Resolves when SIGINT (Ctrl-C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => "SIGINT",
            Err(e) => {
                warn!(error = %e, "failed to install SIGINT handler");
                std::future::pending().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
                "SIGTERM"
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<&'static str>();

    let received = tokio::select! {
        name = ctrl_c => name,
        name = terminate => name,
    };

    info!("Received {received}. Shutting down...");
}
