// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # youtube-data
//!
//! A typed, paginating client for the YouTube Data API v3.
//!
//! ## Features
//!
//! - **Resource services**: channels, videos, playlists, search, comment threads
//! - **Lazy pagination**: `nextPageToken` following as a `Stream`, capped per endpoint
//! - **Id batching**: multi-id video lookups split into 50-id requests
//! - **Typed errors**: status codes and error payloads mapped to [`ApiErrorKind`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use futures::StreamExt;
//! use youtube_data::{Result, YouTube};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let yt = YouTube::with_api_key("AIza...")?;
//!
//!     // One page
//!     let page = yt.videos.get_video("dQw4w9WgXcQ").await?;
//!
//!     // Lazily follow continuation tokens
//!     let mut results = yt.search.search_videos_paginated("rust", 120, None);
//!     while let Some(item) = results.next().await {
//!         println!("{}", item?["id"]);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                           YouTube                            │
//! │   videos   channels   playlists   search   comments          │
//! └──────────────────────────────┬───────────────────────────────┘
//!                                │ endpoint + params (+ filter)
//! ┌──────────────────────────────┴───────────────────────────────┐
//! │  Pagination: CursorPaginator, IdBatchPaginator → ItemStream   │
//! └──────────────────────────────┬───────────────────────────────┘
//!                                │ Executor::execute
//! ┌──────────────────────────────┴───────────────────────────────┐
//! │  HttpClient: GET + credential → classify → Page | Error::Api  │
//! └──────────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types and API error classification
pub mod error;

/// Common types and type aliases
pub mod types;

/// Credentials
pub mod auth;

/// Client configuration
pub mod config;

/// Request execution and response classification
pub mod http;

/// Cursor and id-batch pagination
pub mod pagination;

/// Per-resource services
pub mod resources;

/// Top-level client
pub mod youtube;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{ApiErrorKind, Error, Result};
pub use types::*;

pub use config::ClientConfig;
pub use http::{Executor, HttpClient, SharedExecutor};
pub use pagination::{collect_items, ItemStream};
pub use youtube::YouTube;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
