use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_RATE_LIMIT_BURST_SIZE, DEFAULT_RATE_LIMIT_MAX_REQUESTS,
    DEFAULT_RATE_LIMIT_PERIOD_SECONDS, DEFAULT_TIMEOUT_SECS,
};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Authentication credentials for the figo API
pub struct Credentials {
    /// Bearer access token obtained out of band
    pub access_token: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the figo API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Rate limiter configuration for API requests
    pub rate_limiter: RateLimiterConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the figo REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Whether requests wait for a rate limiter permit before dispatch
    pub enabled: bool,
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_requests: DEFAULT_RATE_LIMIT_MAX_REQUESTS,
            period_seconds: DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
            burst_size: DEFAULT_RATE_LIMIT_BURST_SIZE,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from the environment and an optional `.env` file
    ///
    /// Missing variables fall back to their defaults; a missing access token is
    /// logged but does not abort, every request will then be rejected by the service.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let access_token = get_env_or_default("FIGO_ACCESS_TOKEN", String::new());
        if access_token.is_empty() {
            error!("FIGO_ACCESS_TOKEN not found in environment variables or .env file");
        }

        let defaults = RateLimiterConfig::default();
        Config {
            credentials: Credentials { access_token },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("FIGO_API_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("FIGO_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            rate_limiter: RateLimiterConfig {
                enabled: get_env_or_default("FIGO_RATE_LIMIT_ENABLED", defaults.enabled),
                max_requests: get_env_or_default(
                    "FIGO_RATE_LIMIT_MAX_REQUESTS",
                    defaults.max_requests,
                ),
                period_seconds: get_env_or_default(
                    "FIGO_RATE_LIMIT_PERIOD_SECONDS",
                    defaults.period_seconds,
                ),
                burst_size: get_env_or_default("FIGO_RATE_LIMIT_BURST_SIZE", defaults.burst_size),
            },
        }
    }

    /// Creates a configuration for the given token and base URL with default limits
    pub fn with_token(access_token: &str, base_url: &str) -> Self {
        Config {
            credentials: Credentials {
                access_token: access_token.to_string(),
            },
            rest_api: RestApiConfig {
                base_url: base_url.to_string(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            rate_limiter: RateLimiterConfig::default(),
        }
    }
}
