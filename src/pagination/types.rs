//! Pagination types
//!
//! Shared aliases and the per-run counters used by both paginators.

use crate::error::Result;
use crate::types::JsonValue;
use futures::{Stream, TryStreamExt};
use std::pin::Pin;
use std::sync::Arc;

/// Query parameter carrying the requested page size
pub const MAX_RESULTS_PARAM: &str = "maxResults";

/// Query parameter carrying the continuation token
pub const PAGE_TOKEN_PARAM: &str = "pageToken";

/// Lazily produced sequence of result items
pub type ItemStream = Pin<Box<dyn Stream<Item = Result<JsonValue>> + Send>>;

/// Per-item predicate; items for which it returns `false` are skipped
/// and do not count toward `max_results`
pub type ItemFilter = Arc<dyn Fn(&JsonValue) -> bool + Send + Sync>;

/// Wrap a closure as an [`ItemFilter`]
pub fn item_filter<F>(f: F) -> ItemFilter
where
    F: Fn(&JsonValue) -> bool + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Drain a stream into a vector, stopping at the first error
pub async fn collect_items(stream: ItemStream) -> Result<Vec<JsonValue>> {
    stream.try_collect().await
}

/// Tracks progress during one pagination run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationState {
    /// Continuation token for the next request
    pub cursor: Option<String>,
    /// Items produced so far (after filtering)
    pub fetched: usize,
    /// Requests issued so far
    pub requests: usize,
    /// No further pages are available
    pub done: bool,
}

impl PaginationState {
    /// Create a state starting from an optional token
    pub fn new(cursor: Option<String>) -> Self {
        Self {
            cursor,
            ..Default::default()
        }
    }

    /// Items still allowed before `max_results` is reached
    pub fn remaining(&self, max_results: usize) -> usize {
        max_results.saturating_sub(self.fetched)
    }

    /// Record the token of the page just received
    ///
    /// An absent or empty token ends the run.
    pub fn advance(&mut self, next_token: Option<String>) {
        self.requests += 1;
        match next_token.filter(|t| !t.is_empty()) {
            Some(token) => self.cursor = Some(token),
            None => {
                self.cursor = None;
                self.done = true;
            }
        }
    }
}
