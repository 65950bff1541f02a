//! `search` endpoint, restricted to videos

use crate::error::Result;
use crate::http::SharedExecutor;
use crate::pagination::{paginate, ItemStream, MAX_RESULTS_PARAM};
use crate::types::{Endpoint, Page, QueryParams};

/// Video search
#[derive(Clone)]
pub struct Search {
    executor: SharedExecutor,
}

impl Search {
    pub fn new(executor: SharedExecutor) -> Self {
        Self { executor }
    }

    fn params(query: &str) -> QueryParams {
        QueryParams::new()
            .with("q", query)
            .with("part", "snippet")
            .with("type", "video")
    }

    /// One page of results; `max_results` is passed through unchanged
    pub async fn search_videos(&self, query: &str, max_results: usize) -> Result<Page> {
        let params = Self::params(query).with(MAX_RESULTS_PARAM, max_results);
        self.executor.execute(Endpoint::Search, &params).await
    }

    /// All results up to `max_results`, following continuation tokens
    pub fn search_videos_paginated(
        &self,
        query: &str,
        max_results: usize,
        page_token: Option<String>,
    ) -> ItemStream {
        paginate(
            self.executor.clone(),
            Endpoint::Search,
            Self::params(query),
            max_results,
            page_token,
            None,
        )
    }
}
