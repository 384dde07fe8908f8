//! Chart-contract aggregates over the derived table.
//!
//! Every function here is a pure fold over `&[DerivedVideoRecord]`; rows
//! with an unknown value for the metric being aggregated are excluded, never
//! counted as zero.

use crate::report::derive::DerivedVideoRecord;
use crate::report::stopwords::Stopwords;
use jiff::tz::TimeZone;
use std::collections::{BTreeMap, HashMap};

/// Day-of-week axis labels for the publish heatmap, Monday first.
pub const DAY_ABBRS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Numeric columns a chart can rank or plot by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Views,
    Likes,
    Comments,
}

impl Metric {
    pub fn of(self, row: &DerivedVideoRecord) -> Option<u64> {
        match self {
            Metric::Views => row.view_count,
            Metric::Likes => row.like_count,
            Metric::Comments => row.comment_count,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::Views => "views",
            Metric::Likes => "likes",
            Metric::Comments => "comments",
        }
    }
}

/// Top `n` rows by the chosen metric, descending.
///
/// The sort is stable, so ties keep their original fetch order. Rows whose
/// metric is unknown are excluded from the ranking entirely.
pub fn top_by(rows: &[DerivedVideoRecord], metric: Metric, n: usize) -> Vec<&DerivedVideoRecord> {
    let mut ranked: Vec<&DerivedVideoRecord> =
        rows.iter().filter(|row| metric.of(row).is_some()).collect();
    ranked.sort_by(|a, b| metric.of(b).cmp(&metric.of(a)));
    ranked.truncate(n);
    ranked
}

/// Total known views per calendar year of publication, ascending by year.
///
/// A year appears once for every distinct publish year present; videos with
/// an unknown view count still establish their year but contribute nothing
/// to its sum.
pub fn yearly_view_totals(rows: &[DerivedVideoRecord]) -> Vec<(i16, u64)> {
    let mut totals: BTreeMap<i16, u64> = BTreeMap::new();
    for row in rows {
        if let Some(ts) = row.record.published_at {
            let year = ts.to_zoned(TimeZone::UTC).year();
            let total = totals.entry(year).or_insert(0);
            if let Some(views) = row.view_count {
                *total += views;
            }
        }
    }
    totals.into_iter().collect()
}

/// Dense publish-count grid: rows are days Monday→Sunday, columns hours
/// 0–23. Combinations with no publishes hold 0.
pub fn publish_heatmap(rows: &[DerivedVideoRecord]) -> [[u32; 24]; 7] {
    let mut grid = [[0u32; 24]; 7];
    for row in rows {
        if let Some(ts) = row.record.published_at {
            let zoned = ts.to_zoned(TimeZone::UTC);
            let day = zoned.weekday().to_monday_zero_offset() as usize;
            let hour = zoned.hour() as usize;
            grid[day][hour] += 1;
        }
    }
    grid
}

/// Word frequencies across all titles with stopwords removed, most frequent
/// first; ties are alphabetical for deterministic output.
pub fn title_word_counts(rows: &[DerivedVideoRecord], stopwords: &Stopwords) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for row in rows {
        if let Some(title) = row.record.title.as_deref() {
            for word in stopwords.content_words(title) {
                *counts.entry(word).or_insert(0) += 1;
            }
        }
    }
    let mut counts: Vec<(String, usize)> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

/// (views, likes) pairs for rows where both are known (scatter contract).
pub fn view_like_points(rows: &[DerivedVideoRecord]) -> Vec<(u64, u64)> {
    rows.iter()
        .filter_map(|row| Some((row.view_count?, row.like_count?)))
        .collect()
}

/// Duration histogram: (bucket lower bound in seconds, count) per non-empty
/// bucket, ascending. Rows with an unknown duration are excluded.
pub fn duration_histogram(rows: &[DerivedVideoRecord], bucket_secs: u64) -> Vec<(u64, usize)> {
    assert!(bucket_secs > 0, "bucket width must be positive");
    let mut buckets: BTreeMap<u64, usize> = BTreeMap::new();
    for row in rows {
        if let Some(secs) = row.duration_secs {
            *buckets.entry(secs / bucket_secs * bucket_secs).or_insert(0) += 1;
        }
    }
    buckets.into_iter().collect()
}
