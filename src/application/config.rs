use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication credentials for the Thinkific API
pub struct Credentials {
    /// API key sent in the `X-Auth-API-Key` header
    pub api_key: String,
    /// School subdomain sent in the `X-Auth-Subdomain` header
    pub subdomain: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the Thinkific REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Thinkific API client
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
    /// Creates a new configuration from the environment
    ///
    /// Loads a `.env` file when present, then reads `THINKIFIC_API_KEY`,
    /// `THINKIFIC_SUBDOMAIN`, `THINKIFIC_BASE_URL` and `THINKIFIC_TIMEOUT`.
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let api_key = get_env_or_default("THINKIFIC_API_KEY", String::from("default_api_key"));
        let subdomain =
            get_env_or_default("THINKIFIC_SUBDOMAIN", String::from("default_subdomain"));

        if api_key == "default_api_key" {
            error!("THINKIFIC_API_KEY not found in environment variables or .env file");
        }
        if subdomain == "default_subdomain" {
            error!("THINKIFIC_SUBDOMAIN not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { api_key, subdomain },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("THINKIFIC_BASE_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("THINKIFIC_TIMEOUT", DEFAULT_TIMEOUT_SECONDS),
            },
        }
    }

    /// Creates a configuration with explicit credentials and the default REST settings
    pub fn with_credentials(api_key: impl Into<String>, subdomain: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                api_key: api_key.into(),
                subdomain: subdomain.into(),
            },
            rest_api: RestApiConfig {
                base_url: String::from(DEFAULT_BASE_URL),
                timeout: DEFAULT_TIMEOUT_SECONDS,
            },
        }
    }

    /// Replaces the base URL, e.g. to target a mock server
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }
}
