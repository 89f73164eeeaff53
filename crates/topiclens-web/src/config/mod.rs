//! Configuration loading for topiclens.
//! Everything comes from the environment; a `.env` file is honored when
//! present. Only `DATABASE_URL` is required.

use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be set")]
    Missing { key: &'static str },

    #[error("{key} has unparseable value {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string for the document/topic schema.
    pub database_url: String,
    /// Redis the pipeline workers listen on.
    pub redis_url: String,
    /// List the task envelopes are pushed onto.
    pub queue_name: String,
    pub port: u16,
}

fn default_redis_url()  -> String { "redis://redis:6379".to_string() }
fn default_queue_name() -> String { "python_tasks".to_string() }
fn default_port()       -> u16 { 3000 }

impl Config {
    /// Read configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            redis_url: optional("REDIS_URL").unwrap_or_else(default_redis_url),
            queue_name: optional("QUEUE_NAME").unwrap_or_else(default_queue_name),
            port: parsed("PORT")?.unwrap_or_else(default_port),
        })
    }
}

fn require(key: &'static str) -> Result<String, ConfigError> {
    optional(key).ok_or(ConfigError::Missing { key })
}

/// Unset and blank both mean "use the default".
fn optional(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}

/// A value that is present but does not parse is an error, not a silent
/// fallback to the default.
fn parsed<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match optional(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(None),
    }
}

mod tests;
