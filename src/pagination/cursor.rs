//! Cursor pagination over `nextPageToken`

use super::types::{ItemFilter, ItemStream, PaginationState, MAX_RESULTS_PARAM, PAGE_TOKEN_PARAM};
use crate::error::Result;
use crate::http::SharedExecutor;
use crate::types::{Endpoint, JsonValue, QueryParams};
use std::collections::VecDeque;
use tracing::debug;

/// Follows continuation tokens on one endpoint until `max_results` items
/// have been produced or the server stops returning a token
///
/// Requests never ask for more than the endpoint's page cap, nor for more
/// than the items still wanted.
#[derive(Clone)]
pub struct CursorPaginator {
    executor: SharedExecutor,
    endpoint: Endpoint,
    params: QueryParams,
    max_results: usize,
    page_token: Option<String>,
    filter: Option<ItemFilter>,
}

impl CursorPaginator {
    /// Create a paginator; `max_results` defaults to one full page
    pub fn new(executor: SharedExecutor, endpoint: Endpoint, params: QueryParams) -> Self {
        Self {
            executor,
            endpoint,
            params,
            max_results: endpoint.page_cap(),
            page_token: None,
            filter: None,
        }
    }

    /// Total number of items to produce
    #[must_use]
    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Resume from a token returned by an earlier run
    #[must_use]
    pub fn page_token(mut self, token: Option<String>) -> Self {
        self.page_token = token;
        self
    }

    /// Skip items the predicate rejects
    #[must_use]
    pub fn filter(mut self, filter: Option<ItemFilter>) -> Self {
        self.filter = filter;
        self
    }

    /// Start the run; nothing is requested until the stream is polled
    pub fn into_stream(self) -> ItemStream {
        let run = CursorRun {
            state: PaginationState::new(self.page_token.clone()),
            paginator: self,
            buffer: VecDeque::new(),
        };
        Box::pin(futures::stream::try_unfold(run, CursorRun::next_item))
    }
}

impl std::fmt::Debug for CursorPaginator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CursorPaginator")
            .field("endpoint", &self.endpoint)
            .field("params", &self.params)
            .field("max_results", &self.max_results)
            .field("page_token", &self.page_token)
            .field("has_filter", &self.filter.is_some())
            .finish_non_exhaustive()
    }
}

/// Paginate `endpoint` with fixed `params`
///
/// Shorthand for building a [`CursorPaginator`] and calling `into_stream`.
pub fn paginate(
    executor: SharedExecutor,
    endpoint: Endpoint,
    params: QueryParams,
    max_results: usize,
    page_token: Option<String>,
    filter: Option<ItemFilter>,
) -> ItemStream {
    CursorPaginator::new(executor, endpoint, params)
        .max_results(max_results)
        .page_token(page_token)
        .filter(filter)
        .into_stream()
}

/// In-flight state of one cursor run
struct CursorRun {
    paginator: CursorPaginator,
    state: PaginationState,
    buffer: VecDeque<JsonValue>,
}

impl CursorRun {
    async fn next_item(mut self) -> Result<Option<(JsonValue, Self)>> {
        loop {
            if self.state.remaining(self.paginator.max_results) == 0 {
                self.finish();
                return Ok(None);
            }

            if let Some(item) = self.buffer.pop_front() {
                self.state.fetched += 1;
                return Ok(Some((item, self)));
            }

            if self.state.done {
                self.finish();
                return Ok(None);
            }

            self.fetch_page().await?;
        }
    }

    async fn fetch_page(&mut self) -> Result<()> {
        let endpoint = self.paginator.endpoint;
        let batch_size = self
            .state
            .remaining(self.paginator.max_results)
            .min(endpoint.page_cap());

        let mut params = self.paginator.params.clone();
        params.insert(MAX_RESULTS_PARAM, batch_size);
        if let Some(token) = &self.state.cursor {
            params.insert(PAGE_TOKEN_PARAM, token);
        }

        let page = self.paginator.executor.execute(endpoint, &params).await?;
        let received = page.items.len();

        match &self.paginator.filter {
            Some(filter) => self
                .buffer
                .extend(page.items.into_iter().filter(|item| filter(item))),
            None => self.buffer.extend(page.items),
        }

        debug!(
            %endpoint,
            batch_size,
            received,
            kept = self.buffer.len(),
            has_next = page.next_page_token.is_some(),
            "Fetched page"
        );

        self.state.advance(page.next_page_token);
        Ok(())
    }

    fn finish(&self) {
        debug!(
            endpoint = %self.paginator.endpoint,
            fetched = self.state.fetched,
            requests = self.state.requests,
            "Pagination finished"
        );
    }
}
