//! Feature derivation: the pure step that adds computed columns.

use crate::report::table::VideoRecord;
use jiff::civil::Weekday;
use jiff::tz::TimeZone;
use jiff::{Span, SpanTotal, Unit};

/// A [`VideoRecord`] plus its derived columns.
///
/// `None` in any numeric column means "unknown" (the raw value was absent or
/// unparseable); consumers must exclude unknowns from sums and sorts rather
/// than read them as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedVideoRecord {
    pub record: VideoRecord,
    pub view_count: Option<u64>,
    pub like_count: Option<u64>,
    pub favorite_count: Option<u64>,
    pub comment_count: Option<u64>,
    /// Full day-of-week name of the publish timestamp, e.g. "Thursday".
    pub publish_day_name: Option<&'static str>,
    /// Total whole seconds of the ISO-8601 duration string.
    pub duration_secs: Option<u64>,
    /// Number of tags, 0 when the tags field is absent.
    pub tag_count: usize,
}

/// Derives the computed columns for every row.
///
/// Adds columns only: row count and order are preserved, and the step is a
/// pure function of its input, so deriving the same rows twice yields
/// identical output.
pub fn derive_features(records: Vec<VideoRecord>) -> Vec<DerivedVideoRecord> {
    records.into_iter().map(derive_record).collect()
}

/// Derives the computed columns for a single row.
pub fn derive_record(record: VideoRecord) -> DerivedVideoRecord {
    DerivedVideoRecord {
        view_count: parse_count(record.view_count.as_deref()),
        like_count: parse_count(record.like_count.as_deref()),
        favorite_count: parse_count(record.favorite_count.as_deref()),
        comment_count: parse_count(record.comment_count.as_deref()),
        publish_day_name: record
            .published_at
            .map(|ts| day_name(ts.to_zoned(TimeZone::UTC).weekday())),
        duration_secs: record.duration.as_deref().and_then(parse_duration_secs),
        tag_count: record.tags.as_ref().map_or(0, Vec::len),
        record,
    }
}

/// Parses an API decimal-string count. Absent or unparseable input is
/// `None`, never zero.
pub(crate) fn parse_count(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|s| s.parse().ok())
}

/// Parses an ISO-8601 duration string (e.g. `PT4M13S`) into whole seconds.
pub fn parse_duration_secs(raw: &str) -> Option<u64> {
    let span: Span = raw.parse().ok()?;
    let secs = span
        .total(SpanTotal::from(Unit::Second).days_are_24_hours())
        .ok()?;
    if secs < 0.0 {
        return None;
    }
    Some(secs as u64)
}

pub(crate) fn day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "Monday",
        Weekday::Tuesday => "Tuesday",
        Weekday::Wednesday => "Wednesday",
        Weekday::Thursday => "Thursday",
        Weekday::Friday => "Friday",
        Weekday::Saturday => "Saturday",
        Weekday::Sunday => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record() -> VideoRecord {
        VideoRecord {
            video_id: "vid-a".to_string(),
            channel_title: Some("Some Channel".to_string()),
            title: Some("A Video".to_string()),
            description: None,
            tags: Some(vec!["rust".to_string(), "data".to_string()]),
            // 2021-03-04 is a Thursday.
            published_at: Some("2021-03-04T10:00:30Z".parse().unwrap()),
            view_count: Some("100".to_string()),
            like_count: Some("10".to_string()),
            favorite_count: Some("0".to_string()),
            comment_count: None,
            duration: Some("PT4M13S".to_string()),
            definition: Some("hd".to_string()),
            caption: Some("false".to_string()),
            comments: vec![],
        }
    }

    #[test]
    fn derives_all_columns() {
        let derived = derive_record(record());

        assert_eq!(derived.view_count, Some(100));
        assert_eq!(derived.like_count, Some(10));
        assert_eq!(derived.favorite_count, Some(0));
        assert_eq!(derived.comment_count, None);
        assert_eq!(derived.publish_day_name, Some("Thursday"));
        assert_eq!(derived.duration_secs, Some(253));
        assert_eq!(derived.tag_count, 2);
    }

    #[test]
    fn unparseable_counts_are_unknown_not_zero() {
        let mut r = record();
        r.view_count = Some("1.5M".to_string());
        let derived = derive_record(r);
        assert_eq!(derived.view_count, None);
    }

    #[test]
    fn absent_tags_count_as_zero() {
        let mut r = record();
        r.tags = None;
        assert_eq!(derive_record(r).tag_count, 0);
    }

    #[test]
    fn duration_parsing_handles_day_components() {
        assert_eq!(parse_duration_secs("PT4M13S"), Some(253));
        assert_eq!(parse_duration_secs("PT1H2M3S"), Some(3723));
        assert_eq!(parse_duration_secs("P1DT2H"), Some(93_600));
        assert_eq!(parse_duration_secs("P0D"), Some(0));
        assert_eq!(parse_duration_secs("four minutes"), None);
    }

    #[test]
    fn derivation_is_idempotent() {
        let once = derive_record(record());
        let twice = derive_record(once.record.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn derivation_preserves_row_count_and_order() {
        let mut second = record();
        second.video_id = "vid-b".to_string();
        let derived = derive_features(vec![record(), second]);
        let ids: Vec<_> = derived.iter().map(|d| d.record.video_id.as_str()).collect();
        assert_eq!(ids, vec!["vid-a", "vid-b"]);
    }
}
