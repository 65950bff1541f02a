//! Error types for the YouTube Data API client
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Failures reported by the API itself are a single [`Error::Api`] variant
//! tagged with an [`ApiErrorKind`], so callers can match on the kind while
//! still having the HTTP status and raw body for diagnostics.

use std::fmt;
use thiserror::Error;

/// Classification of a failure reported by the YouTube Data API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// 401: missing or invalid credential
    Authentication,
    /// 403 mentioning the daily quota
    QuotaExceeded,
    /// 403 mentioning a rate limit
    RateLimit,
    /// 404
    NotFound,
    /// 400
    InvalidRequest,
    /// `commentsDisabled`
    Comment,
    /// `videoNotFound`
    Video,
    /// `channelNotFound`
    Channel,
    /// `playlistNotFound`
    Playlist,
    /// `searchNotAllowed`
    Search,
    /// Anything else, including a bare 403
    Generic,
}

impl ApiErrorKind {
    /// Map an `errors[].reason` code from an error payload to a kind
    pub fn from_reason(reason: &str) -> Self {
        match reason {
            "commentsDisabled" => Self::Comment,
            "videoNotFound" => Self::Video,
            "channelNotFound" => Self::Channel,
            "playlistNotFound" => Self::Playlist,
            "searchNotAllowed" => Self::Search,
            _ => Self::Generic,
        }
    }

    /// Short label used in error messages
    pub fn label(self) -> &'static str {
        match self {
            Self::Authentication => "Auth Error",
            Self::QuotaExceeded => "Quota Exceeded",
            Self::RateLimit => "Rate Limit",
            Self::NotFound => "Not Found",
            Self::InvalidRequest => "Invalid Request",
            Self::Comment => "Comments Disabled",
            Self::Video => "Video Not Found",
            Self::Channel => "Channel Not Found",
            Self::Playlist => "Playlist Not Found",
            Self::Search => "Search Not Allowed",
            Self::Generic => "API Error",
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The main error type for the client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // API Errors
    // ============================================================================
    #[error("{kind}: HTTP {status}: {body}")]
    Api {
        kind: ApiErrorKind,
        status: u16,
        reason: Option<String>,
        body: String,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create an API error
    pub fn api(kind: ApiErrorKind, status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            kind,
            status,
            reason: None,
            body: body.into(),
        }
    }

    /// Create an API error carrying the reason code from an error payload
    pub fn api_with_reason(
        kind: ApiErrorKind,
        status: u16,
        reason: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self::Api {
            kind,
            status,
            reason: Some(reason.into()),
            body: body.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Kind of the API failure, if this is one
    pub fn kind(&self) -> Option<ApiErrorKind> {
        match self {
            Error::Api { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// HTTP status of the API failure, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body of the API failure, if this is one
    pub fn body(&self) -> Option<&str> {
        match self {
            Error::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Every classified API failure, whatever its kind
    pub fn is_api_error(&self) -> bool {
        matches!(self, Error::Api { .. })
    }
}

/// Result type alias for the client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
