/// Output of a [`PolarityModel`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PolarityScores {
    /// Valence in `[-1.0, 1.0]`.
    pub polarity: f64,
    /// `0.0` is factual, `1.0` is opinionated.
    pub subjectivity: f64,
}

/// Scores text for valence and subjectivity.
pub trait PolarityModel {
    fn polarity_scores(&self, text: &str) -> PolarityScores;
}

/// Scores text with a single normalized value in `[-1.0, 1.0]`.
pub trait CompoundModel {
    fn compound(&self, text: &str) -> f64;
}
