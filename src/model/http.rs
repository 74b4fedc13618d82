/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Transport seam and its `reqwest` implementation

use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use std::time::Duration;
use tracing::{debug, error};

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status returned by the service
    pub status: StatusCode,
    /// Raw body, empty when the service sent none
    pub body: String,
}

impl RawResponse {
    /// Builds a response from a status and body
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Executes one authenticated HTTP request
///
/// Implementations return `Ok` for every response the service sent, whatever
/// its status; only a request that could not be completed is an error, and it
/// must be an [`AppError::Transport`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `method path` with the bearer `token` and an optional JSON `body`
    async fn execute(
        &self,
        method: Method,
        path: &str,
        token: &str,
        body: Option<String>,
    ) -> Result<RawResponse, AppError>;

    /// Base URL requests are resolved against
    fn base_url(&self) -> &str;
}

/// [`Transport`] over HTTPS using `reqwest`
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: Client,
    base_url: String,
    rate_limiter: Option<RateLimiter>,
}

impl HttpTransport {
    /// Creates a transport from the REST and rate limiter sections of `config`
    ///
    /// # Returns
    /// * `Ok(HttpTransport)` - Transport ready to use
    /// * `Err(AppError::Transport)` - If the HTTP client cannot be built
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        let rate_limiter = config
            .rate_limiter
            .enabled
            .then(|| RateLimiter::new(&config.rate_limiter));

        Ok(Self {
            http_client,
            base_url: config.rest_api.base_url.trim_end_matches('/').to_string(),
            rate_limiter,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        token: &str,
        body: Option<String>,
    ) -> Result<RawResponse, AppError> {
        if let Some(limiter) = &self.rate_limiter {
            limiter.wait().await;
        }

        let url = self.url(path);
        debug!("{} {}", method, url);

        let mut request = self
            .http_client
            .request(method, &url)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header(ACCEPT, "application/json");

        if let Some(b) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(b);
        }

        let response = request.send().await.map_err(|e| {
            error!("Request to {} could not be completed: {}", url, e);
            AppError::Transport(e.to_string())
        })?;

        let status = response.status();
        debug!("Response status: {}", status);

        let body = response.text().await.map_err(|e| {
            error!("Response body from {} could not be read: {}", url, e);
            AppError::Transport(e.to_string())
        })?;

        Ok(RawResponse { status, body })
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
