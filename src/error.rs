//! Error taxonomy for the fetch-and-assemble pipeline.
//!
//! Only [`Error::ChannelNotFound`] (and bad CLI input, rejected before any
//! network call) is fatal to a run; everything else is contained by the
//! pipeline and degrades to missing values.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The channel lookup returned zero items.
    ///
    /// Surfaced explicitly so callers never end up iterating a
    /// plausible-looking empty table.
    #[error("channel not found: {0}")]
    ChannelNotFound(String),

    /// The API answered with a non-success status code.
    #[error("YouTube API request failed with status {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Transport-level failure (connect, timeout, malformed body).
    #[error("HTTP request failed")]
    Http(#[from] reqwest::Error),

    /// The videos endpoint returned a different number of items than ids
    /// requested, which would silently drop or duplicate table rows.
    #[error("video table mismatch: requested {requested} ids but API returned {returned} items")]
    RowCountMismatch { requested: usize, returned: usize },
}
