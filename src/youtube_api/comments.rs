//! YouTube CommentThreads API types.

use crate::youtube_api::types::PageInfo;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `commentThreads.list` API call.
///
/// See: <https://developers.google.com/youtube/v3/docs/commentThreads/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct CommentThreadListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#commentThreadListResponse`.
    pub kind: String,
    /// A list of comment threads that match the request criteria.
    #[serde(default)]
    pub items: VecDeque<CommentThread>,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
    /// Token that can be used as the value of the pageToken parameter to retrieve the next page in the result set.
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// A `commentThread` resource: a top-level comment plus any replies.
///
/// See: <https://developers.google.com/youtube/v3/docs/commentThreads#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct CommentThread {
    /// The ID that YouTube uses to uniquely identify the comment thread.
    pub id: String,
    pub snippet: CommentThreadSnippet,
}

/// Basic details about the comment thread.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommentThreadSnippet {
    /// The thread's top-level comment.
    #[serde(rename = "topLevelComment")]
    pub top_level_comment: Comment,
    /// The total number of replies in the thread.
    #[serde(rename = "totalReplyCount")]
    pub total_reply_count: Option<u32>,
}

/// A `comment` resource.
///
/// See: <https://developers.google.com/youtube/v3/docs/comments#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct Comment {
    pub snippet: CommentSnippet,
}

/// The comment's author and text.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommentSnippet {
    /// The comment's raw text as the author wrote it.
    #[serde(rename = "textOriginal")]
    pub text_original: Option<String>,
    #[serde(rename = "authorDisplayName")]
    pub author_display_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn comment_threads_deserialize() {
        let json = r#"
        {
            "kind": "youtube#commentThreadListResponse",
            "pageInfo": {"totalResults": 2, "resultsPerPage": 10},
            "items": [
                {
                    "id": "ct1",
                    "snippet": {
                        "totalReplyCount": 1,
                        "topLevelComment": {
                            "snippet": {
                                "textOriginal": "great video",
                                "authorDisplayName": "viewer1"
                            }
                        }
                    }
                },
                {
                    "id": "ct2",
                    "snippet": {
                        "topLevelComment": {"snippet": {"textOriginal": "thanks!"}}
                    }
                }
            ]
        }"#;

        let parsed: CommentThreadListResponse = serde_json::from_str(json).unwrap();
        let texts: Vec<_> = parsed
            .items
            .iter()
            .filter_map(|t| t.snippet.top_level_comment.snippet.text_original.as_deref())
            .collect();
        assert_eq!(texts, vec!["great video", "thanks!"]);
        assert_eq!(parsed.items[1].snippet.total_reply_count, None);
    }
}
