//! CLI module
//!
//! Command-line interface over the resource services.
//!
//! # Commands
//!
//! - `video` / `channel` / `playlist` - Single lookups by id
//! - `videos` - Multi-id video lookup
//! - `channels` / `playlists` - Paginated listings
//! - `search` - Video search, one page or paginated
//! - `comments` - Viewer comments on a video

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
