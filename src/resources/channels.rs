//! `channels` endpoint

use crate::error::Result;
use crate::http::SharedExecutor;
use crate::pagination::{paginate, ItemStream};
use crate::types::{Endpoint, Page, QueryParams};

/// Channel lookups
#[derive(Clone)]
pub struct Channels {
    executor: SharedExecutor,
}

impl Channels {
    /// Parts requested for every channel call
    pub const PART: &'static str = "snippet,statistics";

    pub fn new(executor: SharedExecutor) -> Self {
        Self { executor }
    }

    /// Fetch a single channel by id
    pub async fn get_channel(&self, channel_id: &str) -> Result<Page> {
        let params = QueryParams::new()
            .with("id", channel_id)
            .with("part", Self::PART);
        self.executor.execute(Endpoint::Channels, &params).await
    }

    /// Page through channels, optionally resolving a legacy username
    pub fn list_channels(
        &self,
        for_username: Option<&str>,
        max_results: usize,
        page_token: Option<String>,
    ) -> ItemStream {
        let params = QueryParams::new()
            .with("part", Self::PART)
            .with_opt("forUsername", for_username);
        paginate(
            self.executor.clone(),
            Endpoint::Channels,
            params,
            max_results,
            page_token,
            None,
        )
    }
}
