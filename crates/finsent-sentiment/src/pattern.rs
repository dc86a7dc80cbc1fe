//! Adjective-style polarity/subjectivity lexicon.
//!
//! Each matched word contributes its polarity and subjectivity; the headline
//! score is the mean over matched words. A preceding intensifier scales the
//! word, a preceding negation multiplies its polarity by `-0.5`.

use crate::models::{PolarityModel, PolarityScores};
use crate::text::{is_negation, tokenize};

/// `(word, polarity, subjectivity)`.
pub(crate) const LEXICON: &[(&str, f64, f64)] = &[
    // Positive
    ("strong", 0.433, 0.733),
    ("stronger", 0.433, 0.733),
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("record", 0.4, 0.5),
    ("robust", 0.5, 0.6),
    ("solid", 0.35, 0.5),
    ("positive", 0.227, 0.545),
    ("optimistic", 0.5, 0.7),
    ("confident", 0.5, 0.65),
    ("bullish", 0.6, 0.7),
    ("upbeat", 0.55, 0.65),
    ("healthy", 0.5, 0.5),
    ("successful", 0.75, 0.95),
    ("profitable", 0.5, 0.6),
    ("impressive", 1.0, 1.0),
    ("remarkable", 0.75, 0.75),
    ("favorable", 0.5, 0.6),
    ("stable", 0.2, 0.4),
    ("resilient", 0.4, 0.5),
    ("booming", 0.6, 0.6),
    ("higher", 0.25, 0.5),
    ("high", 0.16, 0.54),
    ("new", 0.136, 0.454),
    ("big", 0.0, 0.1),
    ("easy", 0.433, 0.833),
    ("safe", 0.5, 0.5),
    ("happy", 0.8, 1.0),
    // Negative
    ("weak", -0.375, 0.625),
    ("weaker", -0.375, 0.625),
    ("bad", -0.7, 0.667),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("poor", -0.4, 0.6),
    ("negative", -0.3, 0.4),
    ("pessimistic", -0.5, 0.7),
    ("bearish", -0.6, 0.7),
    ("gloomy", -0.6, 0.8),
    ("grim", -0.5, 0.7),
    ("volatile", -0.3, 0.6),
    ("uncertain", -0.2, 0.6),
    ("risky", -0.45, 0.7),
    ("dangerous", -0.6, 0.9),
    ("disappointing", -0.6, 0.7),
    ("terrible", -1.0, 1.0),
    ("lower", -0.1, 0.3),
    ("low", -0.05, 0.3),
    ("slow", -0.3, 0.4),
    ("sluggish", -0.4, 0.5),
    ("costly", -0.3, 0.5),
    ("expensive", -0.5, 0.7),
    ("troubled", -0.5, 0.6),
    ("struggling", -0.5, 0.6),
    ("fragile", -0.4, 0.6),
    ("worried", -0.5, 0.8),
    ("fearful", -0.6, 0.8),
    ("unprofitable", -0.5, 0.6),
    ("illegal", -0.5, 0.5),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("really", 1.2),
    ("incredibly", 1.5),
    ("most", 1.2),
    ("slightly", 0.5),
    ("somewhat", 0.7),
    ("fairly", 0.8),
    ("relatively", 0.8),
];

/// Default [`PolarityModel`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternLexicon;

impl PatternLexicon {
    fn lookup(word: &str) -> Option<(f64, f64)> {
        LEXICON
            .iter()
            .find(|&&(w, _, _)| w == word)
            .map(|&(_, polarity, subjectivity)| (polarity, subjectivity))
    }

    fn intensity(word: &str) -> Option<f64> {
        INTENSIFIERS
            .iter()
            .find(|&&(w, _)| w == word)
            .map(|&(_, m)| m)
    }
}

impl PolarityModel for PatternLexicon {
    fn polarity_scores(&self, text: &str) -> PolarityScores {
        let mut polarities = Vec::new();
        let mut subjectivities = Vec::new();
        let mut negated = false;
        let mut intensity = 1.0_f64;

        for token in tokenize(text) {
            let word = token.lower.as_str();
            if is_negation(word) {
                negated = true;
                continue;
            }
            if let Some(multiplier) = Self::intensity(word) {
                intensity *= multiplier;
                continue;
            }

            if let Some((polarity, subjectivity)) = Self::lookup(word) {
                let mut p = polarity * intensity;
                if negated {
                    p *= -0.5;
                }
                polarities.push(p.clamp(-1.0, 1.0));
                subjectivities.push((subjectivity * intensity).clamp(0.0, 1.0));
            }
            negated = false;
            intensity = 1.0;
        }

        if polarities.is_empty() {
            return PolarityScores::default();
        }

        #[allow(clippy::cast_precision_loss)]
        let n = polarities.len() as f64;
        PolarityScores {
            polarity: (polarities.iter().sum::<f64>() / n).clamp(-1.0, 1.0),
            subjectivity: (subjectivities.iter().sum::<f64>() / n).clamp(0.0, 1.0),
        }
    }
}
