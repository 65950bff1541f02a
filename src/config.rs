//! Client configuration
//!
//! A [`ClientConfig`] can be built in code, read from the environment, or
//! loaded from a YAML (or JSON) file. The CLI layers its flags on top.

use crate::auth::Credential;
use crate::error::{Error, Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Production endpoint of the YouTube Data API v3
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";

/// Environment variable holding an API key
pub const ENV_API_KEY: &str = "YOUTUBE_API_KEY";

/// Environment variable holding an OAuth access token
pub const ENV_ACCESS_TOKEN: &str = "YOUTUBE_ACCESS_TOKEN";

/// Environment variable overriding the base URL
pub const ENV_BASE_URL: &str = "YOUTUBE_API_BASE_URL";

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Credential attached to every request
    pub credential: Option<Credential>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("youtube-data/{}", env!("CARGO_PKG_VERSION")),
            credential: None,
        }
    }
}

impl ClientConfig {
    /// Create a config using an API key and defaults for everything else
    pub fn with_api_key(key: impl Into<String>) -> Self {
        Self::builder().api_key(key).build()
    }

    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Read configuration from `YOUTUBE_*` environment variables
    ///
    /// An access token takes precedence over an API key when both are set.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut builder = Self::builder();
        if let Some(key) = lookup(ENV_API_KEY).filter(|v| !v.is_empty()) {
            builder = builder.api_key(key);
        }
        if let Some(token) = lookup(ENV_ACCESS_TOKEN).filter(|v| !v.is_empty()) {
            builder = builder.access_token(token);
        }
        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.is_empty()) {
            builder = builder.base_url(url);
        }
        builder.build()
    }

    /// Load configuration from a YAML or JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to load config from {}", path.display()))?;
        debug!(path = %path.display(), "Loaded client config");
        Ok(config)
    }

    /// Parse configuration from YAML (JSON is accepted too)
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = serde_yaml::from_str(content)?;
        Ok(file.into_config())
    }

    /// Check the config is usable for requests
    pub fn validate(&self) -> Result<()> {
        match &self.credential {
            None => Err(Error::missing_field("api_key")),
            Some(credential) if credential.is_empty() => Err(Error::missing_field("api_key")),
            Some(_) => {
                url::Url::parse(&self.base_url)?;
                Ok(())
            }
        }
    }
}

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Start from an existing config
    pub fn from_config(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Authenticate with an API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.credential = Some(Credential::api_key(key));
        self
    }

    /// Authenticate with an OAuth access token
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.config.credential = Some(Credential::access_token(token));
        self
    }

    /// Set the credential directly
    pub fn credential(mut self, credential: Credential) -> Self {
        self.config.credential = Some(credential);
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

/// On-disk shape of a config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct ConfigFile {
    api_key: Option<String>,
    access_token: Option<String>,
    base_url: Option<String>,
    timeout_secs: Option<u64>,
    user_agent: Option<String>,
}

impl ConfigFile {
    fn into_config(self) -> ClientConfig {
        let mut builder = ClientConfig::builder();
        if let Some(key) = self.api_key {
            builder = builder.api_key(key);
        }
        if let Some(token) = self.access_token {
            builder = builder.access_token(token);
        }
        if let Some(url) = self.base_url {
            builder = builder.base_url(url);
        }
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }
        builder.build()
    }
}
