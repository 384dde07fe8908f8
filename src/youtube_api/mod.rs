//! YouTube Data API v3 client library.
//!
//! A typed, read-only client covering the four API calls the report needs:
//! channel lookup, playlist-items listing (paginated), videos lookup
//! (batched), and comment-threads listing. Authentication is an API key;
//! every endpoint used here serves public data.
//!
//! Response structs mirror the platform's JSON schemas, restricted to the
//! fields this crate consumes. Fields the platform may omit per item are
//! `Option` throughout, so a sparse response deserializes instead of
//! failing.

pub mod channels;
pub mod client;
pub mod comments;
pub mod playlist_items;
pub mod types;
pub mod videos;

// Re-export main types for convenience
pub use client::{COMMENT_SAMPLE_SIZE, MAX_PAGE_SIZE, YouTubeClient};
pub use types::{PageInfo, PagedStream};

pub use channels::{Channel, ChannelSnippet, ChannelStatistics};
pub use comments::{CommentThread, CommentThreadListResponse};
pub use playlist_items::{PlaylistItem, PlaylistItemListResponse};
pub use videos::{Video, VideoContentDetails, VideoSnippet, VideoStatistics};
