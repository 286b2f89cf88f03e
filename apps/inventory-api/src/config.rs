//! Inventory API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. `main` loads a local `.env` first, so the same variables can
//! live there during development.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

/// Which update contract the service exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiVariant {
    /// Signed-delta updates, list endpoint, product in the update response.
    #[default]
    Primary,
    /// Subtract-only updates with looser validation, no list endpoint.
    Legacy,
}

impl FromStr for ApiVariant {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" => Ok(ApiVariant::Primary),
            "legacy" => Ok(ApiVariant::Legacy),
            _ => Err(()),
        }
    }
}

/// Where products are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    #[default]
    Sqlite,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StoreBackend::Sqlite),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(()),
        }
    }
}

/// Inventory API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Interface to bind
    pub host: IpAddr,

    /// HTTP port
    pub port: u16,

    /// SQLite database file
    pub database_path: PathBuf,

    /// Pool size
    pub db_max_connections: u32,

    /// Apply embedded migrations at startup
    pub run_migrations: bool,

    pub variant: ApiVariant,

    pub store_backend: StoreBackend,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        fn parse<T: FromStr>(
            lookup: &impl Fn(&str) -> Option<String>,
            key: &str,
            default: &str,
        ) -> Result<T, ConfigError> {
            lookup(key)
                .unwrap_or_else(|| default.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue(key.to_string()))
        }

        let config = ApiConfig {
            host: parse(&lookup, "HOST", "0.0.0.0")?,
            port: parse(&lookup, "PORT", "3000")?,
            database_path: PathBuf::from(
                lookup("DATABASE_PATH").unwrap_or_else(|| "./data/inventory.db".to_string()),
            ),
            db_max_connections: parse(&lookup, "DB_MAX_CONNECTIONS", "5")?,
            run_migrations: parse(&lookup, "RUN_MIGRATIONS", "true")?,
            variant: parse(&lookup, "API_VARIANT", "primary")?,
            store_backend: parse(&lookup, "STORE_BACKEND", "sqlite")?,
        };

        if config.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()));
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
