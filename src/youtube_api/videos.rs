//! YouTube Videos API types.

use crate::youtube_api::types::PageInfo;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `videos.list` API call.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct VideoListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#videoListResponse`.
    pub kind: String,
    /// A list of videos that match the request criteria.
    #[serde(default)]
    pub items: VecDeque<Video>,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
}

/// A `video` resource represents a YouTube video.
///
/// Every field below the id is optional: the platform omits fields (and in
/// rare cases whole parts) per item, and an omission must come through as
/// `None` rather than a deserialization failure.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct Video {
    /// The ID that YouTube uses to uniquely identify the video.
    pub id: String,
    /// Basic details about the video: title, description, tags, publish time.
    pub snippet: Option<VideoSnippet>,
    /// Engagement statistics, all as decimal strings.
    pub statistics: Option<VideoStatistics>,
    /// Duration, definition, and caption availability.
    #[serde(rename = "contentDetails")]
    pub content_details: Option<VideoContentDetails>,
}

/// The snippet object contains basic details about the video.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#snippet>
#[derive(Debug, Serialize, Deserialize)]
pub struct VideoSnippet {
    /// The title of the channel the video belongs to.
    #[serde(rename = "channelTitle")]
    pub channel_title: Option<String>,
    /// The video's title.
    pub title: Option<String>,
    /// The video's description.
    pub description: Option<String>,
    /// Keyword tags associated with the video, in upload order.
    pub tags: Option<Vec<String>>,
    /// The date and time that the video was published, in ISO 8601 format.
    #[serde(rename = "publishedAt")]
    pub published_at: Option<Timestamp>,
}

/// Statistics about the video.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#statistics>
#[derive(Debug, Serialize, Deserialize)]
pub struct VideoStatistics {
    /// The number of times the video has been viewed.
    #[serde(rename = "viewCount")]
    pub view_count: Option<String>,
    /// The number of users who have indicated that they liked the video.
    #[serde(rename = "likeCount")]
    pub like_count: Option<String>,
    /// The number of users who currently have the video marked as a favorite video.
    /// Note: This property is deprecated and always returns 0.
    #[serde(rename = "favoriteCount")]
    pub favorite_count: Option<String>,
    /// The number of comments for the video.
    #[serde(rename = "commentCount")]
    pub comment_count: Option<String>,
}

/// The contentDetails object about the video content.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#contentDetails>
#[derive(Debug, Serialize, Deserialize)]
pub struct VideoContentDetails {
    /// The video's length as an ISO 8601 duration, e.g. `PT4M13S`.
    pub duration: Option<String>,
    /// Whether the video is available in `hd` or only `sd`.
    pub definition: Option<String>,
    /// Whether captions are available (`"true"` / `"false"` as a string).
    pub caption: Option<String>,
}
