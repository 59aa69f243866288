//! Process configuration
//!
//! Every environment lookup happens here, once, at startup. The resulting
//! [`Config`] value is handed to the components that need it; nothing else
//! in the program reads the environment.

use std::env;

use thiserror::Error;

use crate::data::DEFAULT_API_URL;

/// Environment variable naming the presidents API endpoint
const API_URL_VAR: &str = "PRESIDENTS_API_URL";
/// Environment variable naming the document store host
const STORE_HOST_VAR: &str = "REDIS_HOST";
/// Environment variable naming the document store port
const STORE_PORT_VAR: &str = "REDIS_PORT";
/// Environment variable carrying the document store password
const STORE_PASSWORD_VAR: &str = "REDIS_PASSWORD";

/// Document store host used when none is configured
const DEFAULT_STORE_HOST: &str = "127.0.0.1";
/// Document store port used when none is configured
const DEFAULT_STORE_PORT: u16 = 6379;

/// Key under which the fetched dataset is cached in the store
pub const CACHE_KEY: &str = "presidents_data";

/// Errors that can occur while resolving configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A configured port was not a number in the valid range
    #[error("invalid {var}: '{value}' is not a valid port number")]
    InvalidPort {
        /// Name of the offending environment variable
        var: &'static str,
        /// The value that failed to parse
        value: String,
    },
}

/// Connection parameters for the document store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Store host name or address
    pub host: String,
    /// Store TCP port
    pub port: u16,
    /// Optional password, passed through as-is
    pub password: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_STORE_HOST.to_string(),
            port: DEFAULT_STORE_PORT,
            password: None,
        }
    }
}

/// Application configuration resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Endpoint serving the presidential term dataset
    pub api_url: String,
    /// Document store connection parameters
    pub store: StoreConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            store: StoreConfig::default(),
        }
    }
}

impl Config {
    /// Resolves configuration from the process environment
    ///
    /// Missing variables fall back to the defaults; an empty password is
    /// treated as no password.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env::var(API_URL_VAR).ok(),
            env::var(STORE_HOST_VAR).ok(),
            env::var(STORE_PORT_VAR).ok(),
            env::var(STORE_PASSWORD_VAR).ok(),
        )
    }

    /// Builds a configuration from raw variable values
    fn from_vars(
        api_url: Option<String>,
        host: Option<String>,
        port: Option<String>,
        password: Option<String>,
    ) -> Result<Self, ConfigError> {
        let port = match port {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidPort {
                var: STORE_PORT_VAR,
                value,
            })?,
            None => DEFAULT_STORE_PORT,
        };

        Ok(Self {
            api_url: api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            store: StoreConfig {
                host: host.unwrap_or_else(|| DEFAULT_STORE_HOST.to_string()),
                port,
                password: password.filter(|value| !value.is_empty()),
            },
        })
    }
}
