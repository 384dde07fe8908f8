//! Fetches a YouTube channel's video metadata and statistics through the
//! Data API v3, assembles them into one row per video, derives the computed
//! columns, and renders a terminal dashboard from the result.
//!
//! The pipeline is strictly sequential: channel resolution, playlist
//! enumeration, batched video details, per-video comment sampling, table
//! assembly, feature derivation. Nothing is persisted; every run starts from
//! live API responses.

use eyre::Context;
use std::collections::HashMap;
use tokio_stream::StreamExt;

pub mod error;
pub mod render;
pub mod report;
pub mod youtube_api;

pub use error::Error;
pub use report::{ChannelStats, DerivedVideoRecord, Metric, Stopwords};
pub use youtube_api::YouTubeClient;

/// Everything one dashboard invocation needs: the channel's statistics and
/// the derived per-video table.
#[derive(Debug, Clone)]
pub struct ChannelReport {
    pub channel: ChannelStats,
    pub videos: Vec<DerivedVideoRecord>,
}

/// Runs the full fetch-and-derive pipeline for one channel.
///
/// An unresolvable channel is fatal ([`Error::ChannelNotFound`] inside the
/// report). A failed comment fetch for an individual video is contained to
/// an empty comment list for that video; everything else about its row is
/// unaffected.
pub async fn build_report(
    yt: &YouTubeClient,
    channel_id: &str,
    sample_comments: bool,
) -> eyre::Result<ChannelReport> {
    let channel = yt
        .get_channel(channel_id)
        .await
        .context("resolve channel")?;
    let stats = ChannelStats::from(channel);
    tracing::info!(
        channel = %stats.name,
        uploads_playlist = %stats.uploads_playlist_id,
        "resolved channel"
    );

    let mut video_ids = Vec::new();
    {
        let ids = yt.list_playlist_video_ids(&stats.uploads_playlist_id);
        let mut ids = std::pin::pin!(ids);
        while let Some(id) = ids.next().await {
            video_ids.push(id.context("enumerate uploads playlist")?);
        }
    }
    tracing::info!(videos = video_ids.len(), "enumerated uploads playlist");

    let videos = yt
        .get_video_details(&video_ids)
        .await
        .context("fetch video details")?;

    let mut comments = HashMap::new();
    if sample_comments {
        for video_id in &video_ids {
            record_comment_sample(&mut comments, video_id, yt.sample_comments(video_id).await);
        }
    }

    let table = report::assemble(videos, comments, video_ids.len())?;
    Ok(ChannelReport {
        channel: stats,
        videos: report::derive_features(table),
    })
}

/// Folds one video's comment-sampling outcome into the sample map.
///
/// A failed fetch (disabled comments, quota, deleted video) is contained
/// here: the map gets no entry for that video, the assembler's left join
/// turns that into an empty comment list, and the run continues.
fn record_comment_sample(
    samples: &mut HashMap<String, Vec<String>>,
    video_id: &str,
    outcome: Result<Vec<String>, Error>,
) {
    match outcome {
        Ok(sample) => {
            samples.insert(video_id.to_string(), sample);
        }
        Err(e) => {
            tracing::warn!(video_id = %video_id, error = %e, "comment sampling failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::youtube_api::videos::{Video, VideoSnippet, VideoStatistics};
    use pretty_assertions::assert_eq;

    fn video(id: &str) -> Video {
        Video {
            id: id.to_string(),
            snippet: Some(VideoSnippet {
                channel_title: Some("Some Channel".to_string()),
                title: Some(format!("title {id}")),
                description: None,
                tags: None,
                published_at: None,
            }),
            statistics: Some(VideoStatistics {
                view_count: Some("1".to_string()),
                like_count: None,
                favorite_count: None,
                comment_count: None,
            }),
            content_details: None,
        }
    }

    #[test]
    fn failed_comment_fetch_empties_that_row_only() {
        let mut samples = HashMap::new();
        record_comment_sample(&mut samples, "vid-ok", Ok(vec!["nice".to_string()]));
        record_comment_sample(
            &mut samples,
            "vid-bad",
            Err(Error::Api {
                status: reqwest::StatusCode::FORBIDDEN,
                body: "commentsDisabled".to_string(),
            }),
        );

        let rows = report::assemble(vec![video("vid-ok"), video("vid-bad")], samples, 2).unwrap();

        assert_eq!(rows[0].comments, vec!["nice".to_string()]);
        // The failing video gets an empty sample; the rest of its record is
        // untouched and the rows around it survive.
        assert_eq!(rows[1].comments, Vec::<String>::new());
        assert_eq!(rows[1].title.as_deref(), Some("title vid-bad"));
        assert_eq!(rows[1].view_count.as_deref(), Some("1"));
    }
}
