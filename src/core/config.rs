//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated
//! from environment variables (with `.env` support via dotenvy). The
//! upstream consumer credentials are required: without them the process
//! refuses to start and no tools are ever registered.

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};
use crate::api::Credentials;

/// Environment variable holding the consumer key.
pub const API_KEY_VAR: &str = "NOUN_PROJECT_API_KEY";

/// Environment variable holding the consumer secret.
pub const API_SECRET_VAR: &str = "NOUN_PROJECT_API_SECRET";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Upstream API consumer credentials.
    pub credentials: Credentials,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "noun-project-mcp".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `NOUN_PROJECT_API_KEY` and `NOUN_PROJECT_API_SECRET` are
    /// required; optional overrides are `MCP_SERVER_NAME` and
    /// `MCP_LOG_LEVEL`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if either credential variable is
    /// missing or empty.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let credentials = Credentials {
            key: required_env(API_KEY_VAR)?,
            secret: required_env(API_SECRET_VAR)?,
        };

        let mut server = ServerConfig::default();
        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            server.name = name;
        }

        let mut logging = LoggingConfig::default();
        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            logging.level = level;
        }

        Ok(Self {
            server,
            logging,
            credentials,
        })
    }
}

fn required_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::config(format!("{} must be set", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn set_credentials(key: Option<&str>, secret: Option<&str>) {
        unsafe {
            match key {
                Some(k) => std::env::set_var(API_KEY_VAR, k),
                None => std::env::remove_var(API_KEY_VAR),
            }
            match secret {
                Some(s) => std::env::set_var(API_SECRET_VAR, s),
                None => std::env::remove_var(API_SECRET_VAR),
            }
        }
    }

    #[test]
    fn test_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        set_credentials(Some("key_12345"), Some("secret_12345"));
        let config = Config::from_env().unwrap();
        assert_eq!(config.credentials.key, "key_12345");
        assert_eq!(config.credentials.secret, "secret_12345");
        set_credentials(None, None);
    }

    #[test]
    fn test_missing_key_is_fatal() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        set_credentials(None, Some("secret"));
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains(API_KEY_VAR));
        set_credentials(None, None);
    }

    #[test]
    fn test_empty_secret_is_fatal() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        set_credentials(Some("key"), Some("  "));
        assert!(Config::from_env().is_err());
        set_credentials(None, None);
    }

    #[test]
    fn test_secret_redacted_in_debug() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        set_credentials(Some("key"), Some("super_secret_value"));
        let config = Config::from_env().unwrap();
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_value"));
        set_credentials(None, None);
    }
}
