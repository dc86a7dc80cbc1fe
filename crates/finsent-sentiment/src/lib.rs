//! Headline sentiment scoring.
//!
//! Two independent lexicon models score each headline: a polarity model
//! (valence plus fact-vs-opinion subjectivity) and a compound model (one
//! normalized intensity-aware score). The compound score alone decides the
//! categorical label.

pub mod models;
pub mod pattern;
pub mod scorer;
pub mod valence;

mod text;

pub use models::{CompoundModel, PolarityModel, PolarityScores};
pub use pattern::PatternLexicon;
pub use scorer::{classify, SentimentScorer, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
pub use valence::ValenceLexicon;
