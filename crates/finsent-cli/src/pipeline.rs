//! One end-to-end run: collect, score, report.

use anyhow::Context;
use finsent_feeds::{Collector, HeadlineFetcher};
use finsent_report::{ReportArtifacts, Reporter};
use finsent_sentiment::{CompoundModel, PolarityModel, SentimentScorer};

#[derive(Debug)]
pub(crate) enum RunOutcome {
    /// No source produced a headline; nothing was written.
    NoHeadlines,
    Reported(ReportArtifacts),
}

/// Collects headlines from every source, scores them and writes the reports.
///
/// An empty collection is a normal outcome and returns
/// [`RunOutcome::NoHeadlines`]. Report write failures are errors.
pub(crate) async fn run_pipeline<F, P, C>(
    collector: &Collector<F>,
    scorer: &SentimentScorer<P, C>,
    reporter: &Reporter,
) -> anyhow::Result<RunOutcome>
where
    F: HeadlineFetcher,
    P: PolarityModel,
    C: CompoundModel,
{
    let headlines = collector.collect_all().await;
    if headlines.is_empty() {
        tracing::warn!("No headlines retrieved.");
        tracing::info!("Process finished");
        return Ok(RunOutcome::NoHeadlines);
    }

    let results = scorer.score_all(&headlines);
    let outcome = match reporter
        .report(&results)
        .context("failed to write sentiment report")?
    {
        Some(artifacts) => RunOutcome::Reported(artifacts),
        None => RunOutcome::NoHeadlines,
    };

    tracing::info!("Process finished");
    Ok(outcome)
}
