//! Common types used throughout the client
//!
//! Endpoint descriptors, query parameters and the page shape shared by every
//! list response of the YouTube Data API.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Endpoints
// ============================================================================

/// Default page cap for list endpoints
pub const DEFAULT_PAGE_CAP: usize = 50;

/// Page cap for `commentThreads`
pub const COMMENT_THREADS_PAGE_CAP: usize = 100;

/// A YouTube Data API resource endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Endpoint {
    Channels,
    Videos,
    Playlists,
    Search,
    CommentThreads,
}

impl Endpoint {
    /// Path segment appended to the base URL
    pub fn path(self) -> &'static str {
        match self {
            Self::Channels => "channels",
            Self::Videos => "videos",
            Self::Playlists => "playlists",
            Self::Search => "search",
            Self::CommentThreads => "commentThreads",
        }
    }

    /// Maximum `maxResults` the server accepts for this endpoint
    pub fn page_cap(self) -> usize {
        match self {
            Self::CommentThreads => COMMENT_THREADS_PAGE_CAP,
            _ => DEFAULT_PAGE_CAP,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Query parameters for a single request
///
/// Values are stored as strings; numbers are formatted and identifier lists
/// comma-joined on insertion. Ordered so request URLs are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a parameter only when a value is present
    #[must_use]
    pub fn with_opt(mut self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    /// Add a comma-joined identifier list
    #[must_use]
    pub fn with_ids<S: AsRef<str>>(self, key: impl Into<String>, ids: &[S]) -> Self {
        let joined = ids.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",");
        self.with(key, joined)
    }

    /// Insert or replace a parameter
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.0.insert(key.into(), value.to_string());
    }

    /// Look up a parameter
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ============================================================================
// Page Response
// ============================================================================

/// Paging summary returned alongside list results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub total_results: Option<u64>,
    #[serde(default)]
    pub results_per_page: Option<u64>,
}

/// One successful response from a list endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Result items, in server order
    #[serde(default)]
    pub items: Vec<JsonValue>,

    /// Continuation token for the next page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,

    /// Continuation token for the previous page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_page_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_info: Option<PageInfo>,

    /// Remaining top-level fields (`kind`, `etag`, ...)
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Page {
    /// Parse a page from a response body
    pub fn from_value(value: JsonValue) -> crate::Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Whether the server reported more results
    pub fn has_next(&self) -> bool {
        self.next_page_token.as_deref().is_some_and(|t| !t.is_empty())
    }
}
