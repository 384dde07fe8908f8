//! Terminal presentation layer.
//!
//! Consumes only the derived table and the aggregate contracts; every
//! function renders one dashboard section to a `String` so the layout is
//! testable without capturing stdout.

use crate::report::aggregate::{self, DAY_ABBRS, Metric};
use crate::report::derive::DerivedVideoRecord;
use crate::report::stopwords::Stopwords;
use crate::report::table::ChannelStats;

const BAR_WIDTH: usize = 30;
const TITLE_WIDTH: usize = 42;

/// Formats a count for display: `532`, `3.4K`, `1.2M`.
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

fn format_opt_count(n: Option<u64>) -> String {
    n.map_or_else(|| "?".to_string(), format_count)
}

fn bar(value: u64, max: u64, width: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let filled = (value as f64 / max as f64 * width as f64).round() as usize;
    "#".repeat(filled.min(width))
}

fn truncate_title(title: &str, width: usize) -> String {
    if title.chars().count() <= width {
        return title.to_string();
    }
    let cut: String = title.chars().take(width.saturating_sub(1)).collect();
    format!("{cut}…")
}

/// Channel summary header.
pub fn render_channel_summary(channel: &ChannelStats) -> String {
    let mut out = String::new();
    out.push_str(&format!("Channel: {}\n", channel.name));
    out.push_str(&format!(
        "  subscribers: {:<10} views: {:<10} videos: {}\n",
        format_opt_count(channel.subscriber_count),
        format_opt_count(channel.view_count),
        format_opt_count(channel.video_count),
    ));
    out
}

/// Ranked table with a proportional bar per row.
pub fn render_top_table(top: &[&DerivedVideoRecord], metric: Metric) -> String {
    let max = top.iter().filter_map(|row| metric.of(row)).max().unwrap_or(0);
    let mut out = String::new();
    out.push_str(&format!("Top {} by {}\n", top.len(), metric.label()));
    for (i, row) in top.iter().enumerate() {
        let title = row.record.title.as_deref().unwrap_or("(untitled)");
        let value = metric.of(row);
        out.push_str(&format!(
            "  {:>2}. {:<width$} {:>8} {}\n",
            i + 1,
            truncate_title(title, TITLE_WIDTH),
            format_opt_count(value),
            bar(value.unwrap_or(0), max, BAR_WIDTH),
            width = TITLE_WIDTH,
        ));
    }
    out
}

/// Views per publish year as a horizontal bar chart.
pub fn render_yearly_totals(totals: &[(i16, u64)]) -> String {
    let max = totals.iter().map(|&(_, views)| views).max().unwrap_or(0);
    let mut out = String::new();
    out.push_str("Views by publish year\n");
    for &(year, views) in totals {
        out.push_str(&format!(
            "  {year} {:<width$} {}\n",
            bar(views, max, BAR_WIDTH * 2),
            format_count(views),
            width = BAR_WIDTH * 2,
        ));
    }
    out
}

/// Publish-time heatmap: days Mon→Sun down, hours 0–23 across. Empty cells
/// render blank; occupied cells use a four-step density ramp scaled to the
/// busiest cell.
pub fn render_heatmap(grid: &[[u32; 24]; 7]) -> String {
    const RAMP: [char; 4] = ['.', ':', '*', '#'];
    let max = grid.iter().flatten().copied().max().unwrap_or(0);

    let mut out = String::new();
    out.push_str("Publish times (UTC)\n      ");
    for hour in 0..24 {
        out.push_str(&format!("{hour:>2} "));
    }
    out.push('\n');
    for (day, row) in DAY_ABBRS.iter().zip(grid) {
        out.push_str(&format!("  {day} "));
        for &count in row {
            let cell = if count == 0 || max == 0 {
                ' '
            } else {
                let step = (count as usize * RAMP.len()).div_ceil(max as usize);
                RAMP[step.clamp(1, RAMP.len()) - 1]
            };
            out.push_str(&format!(" {cell} "));
        }
        out.push('\n');
    }
    out
}

/// The word-cloud stand-in: most frequent title words, largest first.
pub fn render_title_words(counts: &[(String, usize)], n: usize) -> String {
    let mut out = String::new();
    out.push_str("Title words\n  ");
    let mut first = true;
    for (word, count) in counts.iter().take(n) {
        if !first {
            out.push_str("  ");
        }
        out.push_str(&format!("{word}({count})"));
        first = false;
    }
    out.push('\n');
    out
}

/// Views-vs-likes scatter on a fixed character grid, both axes linear from
/// zero to the observed maximum.
pub fn render_scatter(points: &[(u64, u64)]) -> String {
    const ROWS: usize = 12;
    const COLS: usize = 48;

    let mut out = String::new();
    out.push_str("Views vs likes\n");
    if points.is_empty() {
        out.push_str("  (no rows with both views and likes known)\n");
        return out;
    }

    let max_views = points.iter().map(|&(v, _)| v).max().unwrap_or(0).max(1);
    let max_likes = points.iter().map(|&(_, l)| l).max().unwrap_or(0).max(1);

    let mut grid = [[' '; COLS]; ROWS];
    for &(views, likes) in points {
        let col = (views as f64 / max_views as f64 * (COLS - 1) as f64) as usize;
        let row = (likes as f64 / max_likes as f64 * (ROWS - 1) as f64) as usize;
        grid[ROWS - 1 - row][col] = '*';
    }

    for (i, row) in grid.iter().enumerate() {
        let label = if i == 0 {
            format_count(max_likes)
        } else if i == ROWS - 1 {
            "0".to_string()
        } else {
            String::new()
        };
        out.push_str(&format!("  {label:>6} |{}|\n", row.iter().collect::<String>()));
    }
    out.push_str(&format!(
        "         0{:>width$}\n",
        format_count(max_views),
        width = COLS,
    ));
    out
}

/// Duration histogram with one bar per bucket.
pub fn render_duration_histogram(buckets: &[(u64, usize)], bucket_secs: u64) -> String {
    let max = buckets.iter().map(|&(_, count)| count).max().unwrap_or(0);
    let mut out = String::new();
    out.push_str("Video durations\n");
    for &(lower, count) in buckets {
        let upper = lower + bucket_secs;
        out.push_str(&format!(
            "  {:>5}-{:<5} {:<width$} {count}\n",
            format_secs(lower),
            format_secs(upper),
            bar(count as u64, max as u64, BAR_WIDTH),
            width = BAR_WIDTH,
        ));
    }
    out
}

fn format_secs(secs: u64) -> String {
    if secs >= 3600 {
        format!("{}h{:02}m", secs / 3600, (secs % 3600) / 60)
    } else {
        format!("{}:{:02}", secs / 60, secs % 60)
    }
}

/// Renders the whole dashboard in the section order of the original layout.
/// The top table ranks by the chosen metric; everything else is fixed.
pub fn render_dashboard(
    channel: &ChannelStats,
    rows: &[DerivedVideoRecord],
    stopwords: &Stopwords,
    top_n: usize,
    metric: Metric,
) -> String {
    let longest = rows.iter().filter_map(|r| r.duration_secs).max().unwrap_or(0);
    let bucket_secs = suggest_bucket_secs(longest);

    let mut out = String::new();
    out.push_str(&render_channel_summary(channel));
    out.push('\n');
    out.push_str(&render_top_table(
        &aggregate::top_by(rows, metric, top_n),
        metric,
    ));
    out.push('\n');
    out.push_str(&render_scatter(&aggregate::view_like_points(rows)));
    out.push('\n');
    out.push_str(&render_heatmap(&aggregate::publish_heatmap(rows)));
    out.push('\n');
    out.push_str(&render_yearly_totals(&aggregate::yearly_view_totals(rows)));
    out.push('\n');
    out.push_str(&render_duration_histogram(
        &aggregate::duration_histogram(rows, bucket_secs),
        bucket_secs,
    ));
    out.push('\n');
    out.push_str(&render_title_words(
        &aggregate::title_word_counts(rows, stopwords),
        25,
    ));
    out
}

/// Picks a histogram bucket width (whole minutes) that yields roughly a
/// dozen buckets for the longest video.
fn suggest_bucket_secs(max_secs: u64) -> u64 {
    let raw = max_secs / 12;
    (raw / 60 * 60).max(60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn count_formatting() {
        assert_eq!(format_count(532), "532");
        assert_eq!(format_count(3_400), "3.4K");
        assert_eq!(format_count(1_234_567), "1.2M");
    }

    #[test]
    fn heatmap_has_one_line_per_day() {
        let grid = [[0u32; 24]; 7];
        let rendered = render_heatmap(&grid);
        // Title + hour header + 7 day rows.
        assert_eq!(rendered.lines().count(), 9);
        assert!(rendered.contains("Mon"));
        assert!(rendered.contains("Sun"));
    }

    #[test]
    fn scatter_handles_no_points() {
        let rendered = render_scatter(&[]);
        assert!(rendered.contains("no rows"));
    }

    #[test]
    fn bucket_suggestion_is_whole_minutes() {
        assert_eq!(suggest_bucket_secs(0), 60);
        assert_eq!(suggest_bucket_secs(500), 60);
        assert_eq!(suggest_bucket_secs(7200), 600);
    }

    #[test]
    fn top_table_ranks_by_the_chosen_metric() {
        use crate::report::derive::derive_record;
        use crate::report::table::VideoRecord;

        let scored = |id: &str, views: u64, likes: u64| {
            derive_record(VideoRecord {
                video_id: id.to_string(),
                channel_title: None,
                title: Some(format!("video {id}")),
                description: None,
                tags: None,
                published_at: None,
                view_count: Some(views.to_string()),
                like_count: Some(likes.to_string()),
                favorite_count: None,
                comment_count: None,
                duration: None,
                definition: None,
                caption: None,
                comments: vec![],
            })
        };

        // "a" wins on views, "b" wins on likes.
        let rows = vec![scored("a", 100, 1), scored("b", 10, 50)];

        let rendered = render_top_table(&aggregate::top_by(&rows, Metric::Likes, 2), Metric::Likes);
        assert!(rendered.contains("by likes"));
        let a_pos = rendered.find("video a").unwrap();
        let b_pos = rendered.find("video b").unwrap();
        assert!(b_pos < a_pos);
    }

    #[test]
    fn seconds_formatting() {
        assert_eq!(format_secs(253), "4:13");
        assert_eq!(format_secs(3720), "1h02m");
    }
}
