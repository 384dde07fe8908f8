//! Core YouTube API client: API-key auth, shared HTTP client, typed endpoints.

use crate::error::Error;
use crate::youtube_api::{
    channels::Channel,
    channels::ChannelListResponse,
    comments::CommentThreadListResponse,
    playlist_items::PlaylistItemListResponse,
    types::PagedStream,
    videos::{Video, VideoListResponse},
};
use serde::de::DeserializeOwned;
use std::collections::VecDeque;
use std::time::Duration;
use tokio_stream::Stream;
use tracing::instrument;

/// Hard upper bound the API imposes on `maxResults` for list endpoints and
/// on the number of ids per `videos.list` call.
pub const MAX_PAGE_SIZE: usize = 50;

/// How many top-level comments to sample per video.
pub const COMMENT_SAMPLE_SIZE: usize = 10;

/// Client for the read-only subset of the YouTube Data API v3 used here.
///
/// Authentication is a plain API key appended as the `key` query parameter;
/// no OAuth flow is involved since every endpoint we call serves public data.
/// All calls go through [`Self::get_json`], which applies the configured
/// per-request timeout and converts non-success responses into
/// [`Error::Api`]. No retries are attempted.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    /// The user-supplied API key, sent with every request.
    api_key: String,
    /// HTTP client for API requests
    client: reqwest::Client,
}

impl YouTubeClient {
    /// Creates a new client with the given API key and per-request timeout.
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            api_key: api_key.into(),
            client,
        })
    }

    /// Makes a GET request to the YouTube API with common error handling.
    ///
    /// Appends the API key, validates the status code, and parses the JSON
    /// body into the requested response type.
    #[instrument(skip(self, query_params), level = tracing::Level::TRACE)]
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query_params: &[(&str, &str)],
    ) -> Result<T, Error> {
        let response = self
            .client
            .get(url)
            .query(query_params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status_code = response.status();
        if !status_code.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(Error::Api {
                status: status_code,
                body: error_text,
            });
        }

        Ok(response.json().await?)
    }

    /// Resolves a channel id into its [`Channel`] resource.
    ///
    /// Uses the `channels.list` API with `part=snippet,contentDetails,statistics`,
    /// which carries everything the report needs: the channel's title and
    /// statistics plus the id of its uploads playlist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChannelNotFound`] when the lookup yields zero items,
    /// so an unknown id can never masquerade as an empty report.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/channels/list>
    #[instrument(skip(self))]
    pub async fn get_channel(&self, channel_id: &str) -> Result<Channel, Error> {
        let url = "https://www.googleapis.com/youtube/v3/channels";
        let query_params = [
            ("part", "snippet,contentDetails,statistics"),
            ("id", channel_id),
        ];

        let channels: ChannelListResponse = self.get_json(url, &query_params).await?;

        tracing::debug!(
            channel_id,
            returned_items = channels.items.len(),
            "fetched channel"
        );

        first_channel(channels, channel_id)
    }

    /// Returns a paginated stream of every video id in the given playlist.
    ///
    /// Uses the `playlistItems.list` API with pages of [`MAX_PAGE_SIZE`]
    /// items, following the continuation token until a response comes back
    /// without one. Yielded order is playlist order with pages concatenated.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/playlistItems/list>
    #[instrument(skip(self))]
    pub fn list_playlist_video_ids<'a>(
        &'a self,
        playlist_id: &'a str,
    ) -> impl Stream<Item = Result<String, Error>> + use<'a> {
        PagedStream::new(move |page_token| async move {
            let response = self
                .list_playlist_items_internal(playlist_id, page_token)
                .await?;
            let ids: VecDeque<String> = response
                .items
                .into_iter()
                .map(|item| item.content_details.video_id)
                .collect();
            Ok((ids, response.next_page_token))
        })
    }

    /// Fetches details for each id, in batches of at most [`MAX_PAGE_SIZE`].
    ///
    /// Uses the `videos.list` API with `part=snippet,statistics,contentDetails`.
    /// Output preserves input order (batches are consecutive slices of the
    /// input). Fields the platform omits for a given video come back as
    /// `None` inside [`Video`]; callers decide what a missing field means.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/videos/list>
    #[instrument(skip(self, video_ids), fields(requested = video_ids.len()))]
    pub async fn get_video_details(&self, video_ids: &[String]) -> Result<Vec<Video>, Error> {
        let url = "https://www.googleapis.com/youtube/v3/videos";
        let mut all_videos = Vec::with_capacity(video_ids.len());

        for batch in video_ids.chunks(MAX_PAGE_SIZE) {
            let ids = batch.join(",");
            let query_params = [
                ("part", "snippet,statistics,contentDetails"),
                ("id", ids.as_str()),
            ];

            let videos: VideoListResponse = self.get_json(url, &query_params).await?;

            tracing::debug!(
                batch_size = batch.len(),
                returned_items = videos.items.len(),
                "fetched video details batch"
            );

            all_videos.extend(videos.items);
        }

        Ok(all_videos)
    }

    /// Samples up to [`COMMENT_SAMPLE_SIZE`] top-level comment texts for one video.
    ///
    /// Uses the `commentThreads.list` API. Threads whose top-level comment
    /// carries no text are skipped. Errors (comments disabled, quota, video
    /// gone) are returned as-is; the pipeline decides whether to contain
    /// them.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/commentThreads/list>
    #[instrument(skip(self))]
    pub async fn sample_comments(&self, video_id: &str) -> Result<Vec<String>, Error> {
        let url = "https://www.googleapis.com/youtube/v3/commentThreads";
        let max_results = COMMENT_SAMPLE_SIZE.to_string();
        let query_params = [
            ("part", "snippet"),
            ("videoId", video_id),
            ("maxResults", max_results.as_str()),
        ];

        let threads: CommentThreadListResponse = self.get_json(url, &query_params).await?;

        tracing::debug!(
            video_id,
            returned_items = threads.items.len(),
            "fetched comment threads"
        );

        Ok(threads
            .items
            .into_iter()
            .take(COMMENT_SAMPLE_SIZE)
            .filter_map(|thread| thread.snippet.top_level_comment.snippet.text_original)
            .collect())
    }

    /// Internal method to call the `playlistItems.list` API for one page.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/playlistItems/list>
    async fn list_playlist_items_internal(
        &self,
        playlist_id: &str,
        page_token: Option<String>,
    ) -> Result<PlaylistItemListResponse, Error> {
        let url = "https://www.googleapis.com/youtube/v3/playlistItems";
        let max_results = MAX_PAGE_SIZE.to_string();
        let mut query_params = vec![
            ("part", "contentDetails"),
            ("playlistId", playlist_id),
            ("maxResults", max_results.as_str()),
        ];

        if let Some(ref token) = page_token {
            query_params.push(("pageToken", token.as_str()));
        }

        let items: PlaylistItemListResponse = self.get_json(url, &query_params).await?;

        tracing::debug!(
            playlist_id,
            total_results = items.page_info.total_results,
            returned_items = items.items.len(),
            "fetched playlist items page"
        );

        Ok(items)
    }
}

/// A channel lookup yielding zero items means the id does not resolve; that
/// must surface as an error, never as a usable-looking empty result.
fn first_channel(response: ChannelListResponse, channel_id: &str) -> Result<Channel, Error> {
    response
        .items
        .into_iter()
        .next()
        .ok_or_else(|| Error::ChannelNotFound(channel_id.to_string()))
}
