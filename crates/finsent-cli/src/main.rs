mod pipeline;

use anyhow::Context;
use clap::Parser;
use finsent_feeds::{Collector, FeedFetcher, RetryPolicy};
use finsent_report::Reporter;
use finsent_sentiment::SentimentScorer;
use tracing_subscriber::EnvFilter;

use crate::pipeline::{run_pipeline, RunOutcome};

#[derive(Debug, Parser)]
#[command(name = "finsent", version)]
#[command(about = "Collect financial news headlines, score their sentiment and write reports")]
#[command(
    long_about = "Collect financial news headlines from RSS feeds, score their sentiment and \
write CSV, XLSX and chart reports.\n\nConfigured through FINSENT_* environment variables \
(or a .env file): FINSENT_LOG_LEVEL, FINSENT_OUTPUT_DIR, FINSENT_FEEDS_PATH, \
FINSENT_REQUEST_TIMEOUT_SECS, FINSENT_USER_AGENT, FINSENT_MAX_ATTEMPTS, \
FINSENT_BACKOFF_BASE_SECS."
)]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    let config = finsent_core::load_app_config().context("invalid configuration")?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stdout)
        .init();

    tracing::info!(
        feeds = config.feeds.len(),
        output_dir = %config.output_dir.display(),
        "Starting financial news sentiment run"
    );

    let policy = RetryPolicy::new(config.max_attempts, config.backoff_base_secs)?;
    let fetcher = FeedFetcher::new(config.request_timeout_secs, &config.user_agent, policy)?;
    let collector = Collector::new(config.feeds, fetcher);
    let scorer = SentimentScorer::default();
    let reporter = Reporter::new(config.output_dir);

    match run_pipeline(&collector, &scorer, &reporter).await? {
        RunOutcome::NoHeadlines => {}
        RunOutcome::Reported(artifacts) => tracing::debug!(
            csv = %artifacts.csv_path.display(),
            xlsx = %artifacts.xlsx_path.display(),
            chart = %artifacts.chart_path.display(),
            "reports written"
        ),
    }

    Ok(())
}
