//! Label distribution over a result set.

use finsent_core::{SentimentLabel, SentimentResult};

/// Count and share of one label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelShare {
    pub label: SentimentLabel,
    pub count: usize,
    /// Percentage of all results, `0.0..=100.0`.
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SentimentSummary {
    pub total: usize,
    /// Labels that occur at least once, most frequent first.
    pub shares: Vec<LabelShare>,
}

impl SentimentSummary {
    /// Share of `label`, or `None` if it never occurred.
    #[must_use]
    pub fn share(&self, label: SentimentLabel) -> Option<&LabelShare> {
        self.shares.iter().find(|s| s.label == label)
    }

    pub fn log(&self) {
        tracing::info!(total = self.total, "Market Sentiment Summary:");
        for share in &self.shares {
            tracing::info!(
                label = %share.label,
                count = share.count,
                "{}: {:.1}%",
                share.label,
                share.percent
            );
        }
    }
}

/// Occurrences per label, omitting labels with no results. Ordered by count
/// descending; ties follow Positive, Negative, Neutral.
#[must_use]
pub fn count_labels(results: &[SentimentResult]) -> Vec<(SentimentLabel, usize)> {
    let mut counts: Vec<(SentimentLabel, usize)> = SentimentLabel::ALL
        .iter()
        .map(|&label| (label, results.iter().filter(|r| r.label == label).count()))
        .filter(|&(_, count)| count > 0)
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

#[must_use]
pub fn summarize(results: &[SentimentResult]) -> SentimentSummary {
    let total = results.len();
    #[allow(clippy::cast_precision_loss)]
    let shares = count_labels(results)
        .into_iter()
        .map(|(label, count)| LabelShare {
            label,
            count,
            percent: count as f64 * 100.0 / total as f64,
        })
        .collect();
    SentimentSummary { total, shares }
}
