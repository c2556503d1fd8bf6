//! Configuration management for the contacts directory.
//!
//! This module handles loading and validating configuration from environment variables.
//! The resulting [`Config`] is an immutable value passed to the constructors that
//! need it; nothing reads the environment after startup.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Which store implementation the server wires up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    /// SQL stores over a SQLite pool
    #[default]
    Sqlite,
    /// In-memory stores (data is lost on exit)
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sqlite" => Ok(StoreBackend::Sqlite),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!("Must be 'sqlite' or 'memory', got: {}", other)),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Sqlite => write!(f, "sqlite"),
            StoreBackend::Memory => write!(f, "memory"),
        }
    }
}

/// Configuration for the contacts directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// Store implementation (default: sqlite)
    pub store_backend: StoreBackend,

    /// SQLite connection URL, e.g. `sqlite://contacts.db`
    pub database_url: String,

    /// Maximum pooled connections (default: 5)
    pub max_connections: u32,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `DATABASE_URL`: SQLite URL, only when `CONTACTS_STORE` is `sqlite`
    ///
    /// Optional environment variables:
    /// - `CONTACTS_STORE`: `sqlite` or `memory` (default: sqlite)
    /// - `DATABASE_MAX_CONNECTIONS`: Pool size (default: 5)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let store_backend = match env::var("CONTACTS_STORE") {
            Ok(val) => val
                .parse::<StoreBackend>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "CONTACTS_STORE".to_string(),
                    reason,
                })?,
            Err(_) => StoreBackend::default(),
        };

        let database_url = match store_backend {
            StoreBackend::Sqlite => env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingVar("DATABASE_URL".to_string()))?,
            StoreBackend::Memory => env::var("DATABASE_URL").unwrap_or_default(),
        };

        if store_backend == StoreBackend::Sqlite && !database_url.starts_with("sqlite:") {
            return Err(ConfigError::InvalidValue {
                var: "DATABASE_URL".to_string(),
                reason: "Must start with sqlite:".to_string(),
            });
        }

        let max_connections = Self::parse_env_u32("DATABASE_MAX_CONNECTIONS", 5)?;
        if max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                var: "DATABASE_MAX_CONNECTIONS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            store_backend,
            database_url,
            max_connections,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store_backend: StoreBackend::Sqlite,
            database_url: "sqlite::memory:".to_string(),
            max_connections: 5,
            log_level: "error".to_string(),
        }
    }
}
