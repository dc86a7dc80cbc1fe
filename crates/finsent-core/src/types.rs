use std::fmt;

use serde::{Deserialize, Serialize};

/// A single news item's title text.
///
/// Identity is the exact text after trimming surrounding whitespace;
/// comparison is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Headline(String);

impl Headline {
    /// Builds a headline from raw feed text, trimming surrounding whitespace.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self(text.trim().to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Headline {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Headline {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}

impl From<Headline> for String {
    fn from(headline: Headline) -> Self {
        headline.0
    }
}

impl AsRef<str> for Headline {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Headline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Categorical sentiment derived from the compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// All labels in their fixed reporting order.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scores and label for one unique headline.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentResult {
    pub headline: Headline,
    /// Valence in `[-1.0, 1.0]` from the polarity model.
    pub polarity: f64,
    /// Fact (0.0) vs. opinion (1.0) from the polarity model.
    pub subjectivity: f64,
    /// Normalized overall score in `[-1.0, 1.0]` from the compound model.
    pub compound: f64,
    pub label: SentimentLabel,
}
