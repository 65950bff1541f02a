//! HTTP client for the Data API
//!
//! Sends a single GET per call:
//! - Endpoint path appended to the configured base URL
//! - Caller parameters as the query string
//! - Credential attached last, so callers cannot override it
//! - Status and body classified before anything is returned

use super::classify::classify_response;
use super::executor::Executor;
use crate::auth::Credential;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::types::{Endpoint, Page, QueryParams};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

/// Request executor backed by `reqwest`
pub struct HttpClient {
    client: Client,
    base_url: String,
    credential: Credential,
}

impl HttpClient {
    /// Create a client from a validated configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let credential = config
            .credential
            .ok_or_else(|| Error::missing_field("api_key"))?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
            credential,
        })
    }

    /// Create a client using an API key and default settings
    pub fn with_api_key(key: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::with_api_key(key))
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build full URL for an endpoint
    fn build_url(&self, endpoint: Endpoint) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{base}/{}", endpoint.path())
    }
}

#[async_trait]
impl Executor for HttpClient {
    async fn execute(&self, endpoint: Endpoint, params: &QueryParams) -> Result<Page> {
        let url = self.build_url(endpoint);

        let mut req = self.client.get(&url);
        if !params.is_empty() {
            req = req.query(params);
        }
        req = self.credential.apply(req);

        let response = req.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(%endpoint, status, bytes = body.len(), "Request completed");

        match classify_response(status, &body) {
            Ok(value) => Page::from_value(value),
            Err(e) => {
                warn!(%endpoint, status, kind = ?e.kind(), "Request failed");
                Err(e)
            }
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("credential", &self.credential)
            .finish_non_exhaustive()
    }
}
