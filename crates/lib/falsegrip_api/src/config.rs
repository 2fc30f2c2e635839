//! API server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use falsegrip_core::db::{DEFAULT_MAX_CONNECTIONS, resolve_database_url};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 3001;

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener.
    pub bind_addr: SocketAddr,
    /// PostgreSQL connection URL, if one is configured.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub max_connections: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            database_url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl ApiConfig {
    /// Builds the configuration from the raw settings.
    ///
    /// `database_url` takes precedence over `postgres_url`; blank values are
    /// treated as unset.
    pub fn new(
        host: IpAddr,
        port: u16,
        database_url: Option<String>,
        postgres_url: Option<String>,
        max_connections: u32,
    ) -> Self {
        Self {
            bind_addr: SocketAddr::new(host, port),
            database_url: resolve_database_url(database_url, postgres_url),
            max_connections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_listens_on_3001_without_database() {
        let config = ApiConfig::default();
        assert_eq!(config.bind_addr.port(), 3001);
        assert!(config.database_url.is_none());
    }

    #[test]
    fn falls_back_to_postgres_url() {
        let config = ApiConfig::new(
            IpAddr::V4(Ipv4Addr::LOCALHOST),
            8080,
            None,
            Some("postgres://localhost/falsegrip".into()),
            2,
        );
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/falsegrip")
        );
        assert_eq!(config.max_connections, 2);
    }
}
