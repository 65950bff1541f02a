//! Credential types and request decoration

use reqwest::RequestBuilder;
use std::fmt;

/// Query parameter the Data API reads the API key from
pub const API_KEY_PARAM: &str = "key";

/// Credential attached to every request
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// Static API key, sent as `?key=...`
    ApiKey(String),
    /// OAuth 2.0 access token, sent as `Authorization: Bearer ...`
    AccessToken(String),
}

impl Credential {
    /// Create an API key credential
    pub fn api_key(key: impl Into<String>) -> Self {
        Self::ApiKey(key.into())
    }

    /// Create an access token credential
    pub fn access_token(token: impl Into<String>) -> Self {
        Self::AccessToken(token.into())
    }

    /// Apply the credential to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match self {
            Credential::ApiKey(key) => req.query(&[(API_KEY_PARAM, key.as_str())]),
            Credential::AccessToken(token) => req.bearer_auth(token),
        }
    }

    /// Whether the secret is empty
    pub fn is_empty(&self) -> bool {
        match self {
            Credential::ApiKey(value) | Credential::AccessToken(value) => value.is_empty(),
        }
    }
}

// Keeps secrets out of logs and debug output
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::ApiKey(_) => f.write_str("ApiKey(***)"),
            Credential::AccessToken(_) => f.write_str("AccessToken(***)"),
        }
    }
}
