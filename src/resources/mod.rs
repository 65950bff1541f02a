//! Resource services
//!
//! One stateless service per Data API resource. Each holds only a shared
//! handle to the request executor and supplies its endpoint, fixed
//! parameters and (for comments) an item filter to the paginators.

mod channels;
mod comments;
mod playlists;
mod search;
mod videos;

pub use channels::Channels;
pub use comments::{author_channel_id, total_reply_count, viewer_comment_filter, Comments};
pub use playlists::Playlists;
pub use search::Search;
pub use videos::Videos;
