//! Combines both models into one [`SentimentResult`] per headline.

use finsent_core::{Headline, SentimentLabel, SentimentResult};

use crate::models::{CompoundModel, PolarityModel};
use crate::pattern::PatternLexicon;
use crate::valence::ValenceLexicon;

/// Compound scores at or above this are Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound scores at or below this are Negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Map a compound score to its label. Anything strictly between the two
/// thresholds (and NaN) is Neutral.
#[must_use]
pub fn classify(compound: f64) -> SentimentLabel {
    if compound >= POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if compound <= NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Scores headlines with a polarity model and a compound model.
pub struct SentimentScorer<P = PatternLexicon, C = ValenceLexicon> {
    polarity_model: P,
    compound_model: C,
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new(PatternLexicon, ValenceLexicon)
    }
}

impl<P: PolarityModel, C: CompoundModel> SentimentScorer<P, C> {
    #[must_use]
    pub fn new(polarity_model: P, compound_model: C) -> Self {
        Self {
            polarity_model,
            compound_model,
        }
    }

    #[must_use]
    pub fn score(&self, headline: &Headline) -> SentimentResult {
        let scores = self.polarity_model.polarity_scores(headline.as_str());
        let compound = self.compound_model.compound(headline.as_str());
        SentimentResult {
            headline: headline.clone(),
            polarity: scores.polarity,
            subjectivity: scores.subjectivity,
            compound,
            label: classify(compound),
        }
    }

    /// Scores each headline in order.
    #[must_use]
    pub fn score_all(&self, headlines: &[Headline]) -> Vec<SentimentResult> {
        let results: Vec<SentimentResult> = headlines.iter().map(|h| self.score(h)).collect();
        tracing::debug!(count = results.len(), "scored headlines");
        results
    }
}
