//! YouTube Channels API types.

use crate::youtube_api::types::PageInfo;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `channels.list` API call.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#channelListResponse`.
    pub kind: String,
    /// A list of channels that match the request criteria.
    #[serde(default)]
    pub items: VecDeque<Channel>,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
}

/// A `channel` resource contains information about a YouTube channel.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct Channel {
    /// The ID that YouTube uses to uniquely identify the channel.
    pub id: String,
    /// Contains basic details about the channel.
    pub snippet: ChannelSnippet,
    /// Channel-level video collections, notably the uploads playlist.
    #[serde(rename = "contentDetails")]
    pub content_details: ChannelContentDetails,
    /// Channel-level statistics.
    pub statistics: ChannelStatistics,
}

/// The snippet object contains basic details about the channel.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#snippet>
#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelSnippet {
    /// The channel's title.
    pub title: String,
    /// The channel's description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Playlists associated with the channel.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#contentDetails>
#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelContentDetails {
    #[serde(rename = "relatedPlaylists")]
    pub related_playlists: RelatedPlaylists,
}

/// Named playlists the platform maintains implicitly for every channel.
#[derive(Debug, Serialize, Deserialize)]
pub struct RelatedPlaylists {
    /// The playlist that contains all of the channel's uploaded videos.
    pub uploads: String,
}

/// Statistics about the channel.
///
/// All counts arrive as decimal strings; `subscriberCount` is absent when
/// the channel hides it.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#statistics>
#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelStatistics {
    #[serde(rename = "subscriberCount")]
    pub subscriber_count: Option<String>,
    #[serde(rename = "viewCount")]
    pub view_count: Option<String>,
    #[serde(rename = "videoCount")]
    pub video_count: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn channel_list_response_deserializes() {
        let json = r#"
        {
            "kind": "youtube#channelListResponse",
            "pageInfo": {"totalResults": 1, "resultsPerPage": 5},
            "items": [
                {
                    "id": "UC123",
                    "snippet": {"title": "Some Channel", "description": "About it"},
                    "contentDetails": {"relatedPlaylists": {"uploads": "UU123"}},
                    "statistics": {
                        "viewCount": "1000",
                        "subscriberCount": "42",
                        "videoCount": "7"
                    }
                }
            ]
        }"#;

        let parsed: ChannelListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.items.len(), 1);
        let channel = &parsed.items[0];
        assert_eq!(channel.snippet.title, "Some Channel");
        assert_eq!(channel.content_details.related_playlists.uploads, "UU123");
        assert_eq!(channel.statistics.subscriber_count.as_deref(), Some("42"));
    }

    #[test]
    fn hidden_subscriber_count_is_none() {
        let json = r#"
        {
            "kind": "youtube#channelListResponse",
            "pageInfo": {"totalResults": 1, "resultsPerPage": 5},
            "items": [
                {
                    "id": "UC456",
                    "snippet": {"title": "Shy Channel"},
                    "contentDetails": {"relatedPlaylists": {"uploads": "UU456"}},
                    "statistics": {"viewCount": "10", "videoCount": "1"}
                }
            ]
        }"#;

        let parsed: ChannelListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.items[0].statistics.subscriber_count, None);
        assert_eq!(parsed.items[0].snippet.description, None);
    }

    #[test]
    fn empty_items_deserializes_to_empty_list() {
        let json = r#"
        {
            "kind": "youtube#channelListResponse",
            "pageInfo": {"totalResults": 0, "resultsPerPage": 5}
        }"#;

        let parsed: ChannelListResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.items.is_empty());
    }
}
