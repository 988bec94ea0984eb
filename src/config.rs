//! Configuration for the Me API client.
//!
//! Everything is driven by environment variables (a `.env` file is loaded if
//! present). A pre-provisioned token pair can be injected via `ME_ACCESS_TOKEN`
//! and `ME_REFRESH_TOKEN` to skip the SMS verification challenge entirely.

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Credentials for the Me API
pub struct Credentials {
    /// Phone number the account is registered on, international format
    pub phone_number: Option<String>,
    /// Pre-provisioned access token, skips the verification challenge
    pub access_token: Option<String>,
    /// Pre-provisioned refresh token
    pub refresh_token: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the Me REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Me API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration instance from environment variables
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        // Explicitly load the .env file
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            credentials: Credentials {
                phone_number: get_env_or_none("ME_PHONE_NUMBER"),
                access_token: get_env_or_none("ME_ACCESS_TOKEN"),
                refresh_token: get_env_or_none("ME_REFRESH_TOKEN"),
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("ME_BASE_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("ME_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
        }
    }

    /// Creates a configuration pointing at a specific base URL, leaving the
    /// credentials empty. Mostly useful for tests against a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                phone_number: None,
                access_token: None,
                refresh_token: None,
            },
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
        }
    }

    /// Builds a full request URL from an endpoint path.
    pub fn rest_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.rest_api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
