//! `commentThreads` endpoint
//!
//! Viewer comments are top-level threads that were not written by the
//! channel owner and have no replies yet.

use crate::error::Result;
use crate::http::SharedExecutor;
use crate::pagination::{collect_items, item_filter, paginate, ItemFilter, ItemStream};
use crate::types::{Endpoint, JsonValue, QueryParams};

/// Comment thread listing
#[derive(Clone)]
pub struct Comments {
    executor: SharedExecutor,
}

impl Comments {
    pub fn new(executor: SharedExecutor) -> Self {
        Self { executor }
    }

    /// Viewer comments on a video, up to `max_results`
    pub fn viewer_comments_paginated(
        &self,
        video_id: &str,
        channel_id: &str,
        max_results: usize,
        page_token: Option<String>,
    ) -> ItemStream {
        let params = QueryParams::new()
            .with("part", "snippet")
            .with("videoId", video_id)
            .with("textFormat", "plainText")
            .with("order", "relevance");
        paginate(
            self.executor.clone(),
            Endpoint::CommentThreads,
            params,
            max_results,
            page_token,
            Some(viewer_comment_filter(channel_id)),
        )
    }

    /// Same as [`viewer_comments_paginated`](Self::viewer_comments_paginated),
    /// collected into a vector
    pub async fn viewer_comments(
        &self,
        video_id: &str,
        channel_id: &str,
        max_results: usize,
    ) -> Result<Vec<JsonValue>> {
        collect_items(self.viewer_comments_paginated(video_id, channel_id, max_results, None)).await
    }
}

/// Author channel id of a thread's top-level comment
pub fn author_channel_id(thread: &JsonValue) -> Option<&str> {
    thread
        .pointer("/snippet/topLevelComment/snippet/authorChannelId/value")
        .and_then(JsonValue::as_str)
}

/// Number of replies to a thread; missing counts as zero
pub fn total_reply_count(thread: &JsonValue) -> u64 {
    thread
        .pointer("/snippet/totalReplyCount")
        .and_then(JsonValue::as_u64)
        .unwrap_or(0)
}

/// Keep threads not authored by `owner_channel_id` and without replies
pub fn viewer_comment_filter(owner_channel_id: impl Into<String>) -> ItemFilter {
    let owner = owner_channel_id.into();
    item_filter(move |thread| {
        author_channel_id(thread) != Some(owner.as_str()) && total_reply_count(thread) == 0
    })
}
