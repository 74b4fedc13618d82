/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Authenticated figo session
//!
//! A [`Session`] owns one access token for its lifetime and turns typed
//! operations into exactly one transport call each. It keeps no other state,
//! so a session can be cloned and used from many tasks at once.

use crate::application::config::Config;
use crate::error::AppError;
use crate::model::http::{HttpTransport, RawResponse, Transport};
use crate::model::mapper::{JsonMapper, ResponseMapper};
use crate::session::response::{Outcome, ResourceScope, classify, success_body};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Authenticated session against the figo API
pub struct Session<T: Transport = HttpTransport, M: ResponseMapper = JsonMapper> {
    access_token: Arc<str>,
    transport: Arc<T>,
    mapper: M,
}

impl Session {
    /// Creates a session for `access_token` against the default figo endpoint
    ///
    /// # Returns
    /// * `Ok(Session)` - Session ready to use
    /// * `Err(AppError::Transport)` - If the HTTP client cannot be built
    pub fn new(access_token: &str) -> Result<Self, AppError> {
        Self::from_config(&Config::with_token(
            access_token,
            crate::constants::DEFAULT_BASE_URL,
        ))
    }

    /// Creates a session from a full configuration
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::with_transport(
            &config.credentials.access_token,
            transport,
        ))
    }
}

impl<T: Transport> Session<T, JsonMapper> {
    /// Creates a session over a custom transport, decoding JSON
    pub fn with_transport(access_token: &str, transport: T) -> Self {
        Self::with_parts(access_token, Arc::new(transport), JsonMapper)
    }
}

impl<T: Transport, M: ResponseMapper> Session<T, M> {
    /// Creates a session from its collaborators
    pub fn with_parts(access_token: &str, transport: Arc<T>, mapper: M) -> Self {
        Self {
            access_token: Arc::from(access_token),
            transport,
            mapper,
        }
    }

    /// The bearer token every request carries
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// The transport shared by all clones of this session
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// URL of the hosted synchronization flow for a task token
    pub fn sync_url(&self, task_token: &str) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("id", task_token)
            .finish();
        format!("{}/task/start?{}", self.transport.base_url(), query)
    }

    /// The single transport call behind every operation
    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<RawResponse, AppError> {
        self.transport
            .execute(method, path, &self.access_token, body)
            .await
    }

    /// GET of a collection or singleton; every non-2xx is a failure
    pub(crate) async fn fetch<R: DeserializeOwned>(&self, path: &str) -> Result<R, AppError> {
        let response = self.dispatch(Method::GET, path, None).await?;
        let body = success_body(&self.mapper, response)?;
        self.mapper.decode(&body)
    }

    /// GET of a single resource; not found is `None`
    pub(crate) async fn fetch_optional<R: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<R>, AppError> {
        let response = self.dispatch(Method::GET, path, None).await?;
        match classify(&self.mapper, response, ResourceScope::Item)? {
            Outcome::Success(body) => self.mapper.decode(&body).map(Some),
            Outcome::Absent => {
                debug!("{} not found", path);
                Ok(None)
            }
        }
    }

    /// POST or PUT of a JSON body; an empty success body yields `None`
    pub(crate) async fn submit<B, R>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Option<R>, AppError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let raw = self.mapper.encode(body)?;
        let response = self.dispatch(method, path, Some(raw)).await?;
        let body = success_body(&self.mapper, response)?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        self.mapper.decode(&body).map(Some)
    }

    /// DELETE of a single resource; `false` when it was already gone
    pub(crate) async fn delete(&self, path: &str) -> Result<bool, AppError> {
        let response = self.dispatch(Method::DELETE, path, None).await?;
        match classify(&self.mapper, response, ResourceScope::Item)? {
            Outcome::Success(_) => Ok(true),
            Outcome::Absent => {
                warn!("{} was already removed", path);
                Ok(false)
            }
        }
    }
}

impl<T: Transport, M: ResponseMapper + Clone> Clone for Session<T, M> {
    fn clone(&self) -> Self {
        Self {
            access_token: Arc::clone(&self.access_token),
            transport: Arc::clone(&self.transport),
            mapper: self.mapper.clone(),
        }
    }
}

impl<T: Transport, M: ResponseMapper> fmt::Debug for Session<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field("base_url", &self.transport.base_url())
            .finish()
    }
}
