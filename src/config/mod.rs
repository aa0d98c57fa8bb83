//! Configuration loading from the process environment.
//!
//! Resolved exactly once at startup; the shared HTTP client is built from
//! the resolved values and never reconfigured, so later changes to the
//! environment have no effect on a running process.

use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Env var holding the shared-client timeout in seconds.
pub const ENV_TIMEOUT: &str = "TIMEOUT";

/// Env var holding the provider API key.
pub const ENV_API_KEY: &str = "APIKEY";

/// Env var holding the inbound bind address.
pub const ENV_BIND_ADDRESS: &str = "BIND_ADDRESS";

/// Provider endpoint; owned here, not configurable per deployment.
pub const PROVIDER_BASE_URL: &str = "http://www.omdbapi.com/";

const DEFAULT_TIMEOUT_SECS: u64 = 3;
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Errors raised while resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// Application configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Inbound bind address (e.g. "0.0.0.0:8080").
    pub bind_address: String,

    /// Shared outbound-client timeout in seconds.
    pub client_timeout_secs: u64,

    /// Provider API key.
    pub api_key: String,

    /// Provider base URL.
    pub provider_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            client_timeout_secs: DEFAULT_TIMEOUT_SECS,
            api_key: String::new(),
            provider_base_url: PROVIDER_BASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Resolve configuration from the environment.
    ///
    /// An absent or unparseable timeout falls back to the default; a
    /// missing API key is a startup error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var(ENV_API_KEY).map_err(|_| ConfigError::MissingVar(ENV_API_KEY))?;

        Ok(Self {
            bind_address: env::var(ENV_BIND_ADDRESS)
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            client_timeout_secs: parse_timeout(env::var(ENV_TIMEOUT).ok()),
            api_key,
            provider_base_url: PROVIDER_BASE_URL.to_string(),
        })
    }
}

fn parse_timeout(raw: Option<String>) -> u64 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(DEFAULT_TIMEOUT_SECS)
}
