use std::{env, path::PathBuf};

use thiserror::Error;

/// Connection string used when `DB_URI` is not set.
pub const DEFAULT_DATABASE_URI: &str = "sqlite:///app.db";

/// Errors raised while reading configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unsupported database URI {0:?}: only sqlite:// URIs are supported")]
    UnsupportedScheme(String),
    #[error("Invalid SQLite URI {0:?}: expected sqlite:///<path> or sqlite://")]
    InvalidSqliteUri(String),
}

/// Where the relational store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    /// File-backed database, created on first open.
    File(PathBuf),
    /// Private in-memory database, dropped with the process.
    Memory,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database: DatabaseLocation,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DB_URI` - Database connection string (default: "sqlite:///app.db")
    pub fn from_env() -> Result<Self, ConfigError> {
        let uri = env::var("DB_URI").unwrap_or_else(|_| DEFAULT_DATABASE_URI.to_string());
        Self::from_uri(&uri)
    }

    /// Build configuration from an explicit connection string.
    pub fn from_uri(uri: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            database: parse_database_uri(uri)?,
        })
    }
}

/// Parses an SQLAlchemy-style SQLite URI.
///
/// - `sqlite://` and `sqlite:///:memory:` select an in-memory database
/// - `sqlite:///app.db` is relative to the working directory
/// - `sqlite:////var/lib/app.db` is absolute
pub fn parse_database_uri(uri: &str) -> Result<DatabaseLocation, ConfigError> {
    let rest = uri
        .strip_prefix("sqlite://")
        .ok_or_else(|| ConfigError::UnsupportedScheme(uri.to_string()))?;

    if rest.is_empty() || rest == "/:memory:" {
        return Ok(DatabaseLocation::Memory);
    }

    match rest.strip_prefix('/') {
        Some(path) if !path.is_empty() => Ok(DatabaseLocation::File(PathBuf::from(path))),
        _ => Err(ConfigError::InvalidSqliteUri(uri.to_string())),
    }
}
