use clap::{Parser, ValueEnum};
use std::io::IsTerminal;
use std::time::Duration;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use yt_channel_report::{Metric, Stopwords, YouTubeClient, build_report, render};

/// Fetch a YouTube channel's video statistics and print a dashboard.
#[derive(Debug, Parser)]
#[command(name = "yt-channel-report", version)]
struct Args {
    /// Channel id, e.g. UC4JX40jDee_tINbkjycV4Sg
    channel_id: String,

    /// YouTube Data API v3 key
    #[arg(long, env = "YT_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Per-request timeout in seconds (no retries are attempted)
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// How many videos the top table shows
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Which metric the top table ranks by
    #[arg(long, value_enum, default_value = "views")]
    metric: RankMetric,

    /// Skip comment sampling (saves one API call per video)
    #[arg(long)]
    skip_comments: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RankMetric {
    Views,
    Likes,
    Comments,
}

impl From<RankMetric> for Metric {
    fn from(metric: RankMetric) -> Self {
        match metric {
            RankMetric::Views => Metric::Views,
            RankMetric::Likes => Metric::Likes,
            RankMetric::Comments => Metric::Comments,
        }
    }
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_ansi(std::io::stdout().is_terminal())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if args.api_key.trim().is_empty() {
        eyre::bail!("API key must not be empty");
    }
    if args.channel_id.trim().is_empty() {
        eyre::bail!("channel id must not be empty");
    }

    let yt = YouTubeClient::new(args.api_key, Duration::from_secs(args.timeout_secs))?;
    let report = build_report(&yt, &args.channel_id, !args.skip_comments).await?;

    let stopwords = Stopwords::english();
    print!(
        "{}",
        render::render_dashboard(
            &report.channel,
            &report.videos,
            &stopwords,
            args.top,
            args.metric.into(),
        )
    );

    Ok(())
}
