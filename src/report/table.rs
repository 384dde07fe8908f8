//! Channel statistics and the assembled per-video table.

use crate::error::Error;
use crate::report::derive::parse_count;
use crate::youtube_api::channels::Channel;
use crate::youtube_api::videos::Video;
use jiff::Timestamp;
use std::collections::HashMap;

/// Channel-level statistics, fetched once per run.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelStats {
    pub name: String,
    /// `None` when the channel hides its subscriber count.
    pub subscriber_count: Option<u64>,
    pub view_count: Option<u64>,
    pub video_count: Option<u64>,
    /// Playlist holding every upload, fed to the playlist enumerator.
    pub uploads_playlist_id: String,
}

impl From<Channel> for ChannelStats {
    fn from(channel: Channel) -> Self {
        Self {
            name: channel.snippet.title,
            subscriber_count: parse_count(channel.statistics.subscriber_count.as_deref()),
            view_count: parse_count(channel.statistics.view_count.as_deref()),
            video_count: parse_count(channel.statistics.video_count.as_deref()),
            uploads_playlist_id: channel.content_details.related_playlists.uploads,
        }
    }
}

/// One row of the assembled table: a video's fetched fields plus its comment
/// sample. Counts stay as the API's raw decimal strings here; numeric
/// coercion happens in feature derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoRecord {
    pub video_id: String,
    pub channel_title: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub published_at: Option<Timestamp>,
    pub view_count: Option<String>,
    pub like_count: Option<String>,
    pub favorite_count: Option<String>,
    pub comment_count: Option<String>,
    pub duration: Option<String>,
    pub definition: Option<String>,
    pub caption: Option<String>,
    /// Up to 10 top-level comment texts; empty when the fetch failed or
    /// comments are disabled.
    pub comments: Vec<String>,
}

/// Joins fetched video details with comment samples, one row per video.
///
/// Left-join semantics keyed on video id: every fetched video yields exactly
/// one row, and a video with no comment sample gets an empty list. The
/// `requested` count is the playlist enumerator's id count; a differing
/// number of fetched videos means rows would be silently dropped or
/// duplicated downstream, so it fails with [`Error::RowCountMismatch`]
/// instead.
pub fn assemble(
    videos: Vec<Video>,
    mut comments: HashMap<String, Vec<String>>,
    requested: usize,
) -> Result<Vec<VideoRecord>, Error> {
    if videos.len() != requested {
        return Err(Error::RowCountMismatch {
            requested,
            returned: videos.len(),
        });
    }

    Ok(videos
        .into_iter()
        .map(|video| {
            let comments = comments.remove(&video.id).unwrap_or_default();
            let snippet = video.snippet;
            let stats = video.statistics;
            let details = video.content_details;
            VideoRecord {
                comments,
                channel_title: snippet.as_ref().and_then(|s| s.channel_title.clone()),
                title: snippet.as_ref().and_then(|s| s.title.clone()),
                description: snippet.as_ref().and_then(|s| s.description.clone()),
                tags: snippet.as_ref().and_then(|s| s.tags.clone()),
                published_at: snippet.as_ref().and_then(|s| s.published_at),
                view_count: stats.as_ref().and_then(|s| s.view_count.clone()),
                like_count: stats.as_ref().and_then(|s| s.like_count.clone()),
                favorite_count: stats.as_ref().and_then(|s| s.favorite_count.clone()),
                comment_count: stats.as_ref().and_then(|s| s.comment_count.clone()),
                duration: details.as_ref().and_then(|d| d.duration.clone()),
                definition: details.as_ref().and_then(|d| d.definition.clone()),
                caption: details.as_ref().and_then(|d| d.caption.clone()),
                video_id: video.id,
            }
        })
        .collect())
}
