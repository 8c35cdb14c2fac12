//! Application configuration loaded from environment variables.
//!
//! Fail-fast loading with validation: required variables must be present and
//! valid, or the application exits with a clear error message before any
//! store is touched.

use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// An environment variable is set but cannot be parsed.
    #[error("Invalid value for {var}: {message}")]
    InvalidVar {
        var: &'static str,
        message: String,
    },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// `PostgreSQL` connection string. Required.
    pub database_url: String,

    /// TCP port to listen on. Default 8080.
    pub port: u16,

    /// Maximum database connections in the pool. Default 10.
    pub max_db_connections: u32,

    /// Directory identity documents are written into.
    pub document_storage_path: PathBuf,

    /// Public URL prefix for serving stored documents.
    pub document_url_prefix: String,

    /// Default log filter directive.
    pub log_filter: String,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary lookup function.
    ///
    /// Split out from [`Config::from_env`] so tests do not race over
    /// process-global environment state.
    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = get("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingVar("DATABASE_URL"))?;

        let port = match get("PORT") {
            Some(raw) => raw.parse().map_err(|e| ConfigError::InvalidVar {
                var: "PORT",
                message: format!("{e}"),
            })?,
            None => 8080,
        };

        let max_db_connections = match get("MAX_DB_CONNECTIONS") {
            Some(raw) => raw.parse().map_err(|e| ConfigError::InvalidVar {
                var: "MAX_DB_CONNECTIONS",
                message: format!("{e}"),
            })?,
            None => 10,
        };

        let document_storage_path = get("DOCUMENT_STORAGE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./data/documents"));

        let document_url_prefix =
            get("DOCUMENT_URL_PREFIX").unwrap_or_else(|| "/documents".to_string());

        let log_filter = get("LOG_FILTER").unwrap_or_else(|| "info,propera=debug".to_string());

        Ok(Self {
            database_url,
            port,
            max_db_connections,
            document_storage_path,
            document_url_prefix,
            log_filter,
        })
    }
}
