use std::path::PathBuf;

use finsent_core::{Headline, SentimentLabel, SentimentResult};

/// Fresh, empty directory under the system temp dir, unique per test name
/// and process.
pub(crate) fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("finsent-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

pub(crate) fn result(
    headline: &str,
    polarity: f64,
    subjectivity: f64,
    compound: f64,
    label: SentimentLabel,
) -> SentimentResult {
    SentimentResult {
        headline: Headline::new(headline),
        polarity,
        subjectivity,
        compound,
        label,
    }
}

pub(crate) fn sample_results() -> Vec<SentimentResult> {
    vec![
        result(
            "Stocks rally on strong earnings",
            0.433_333_333_333_333_3,
            0.733_333_333_333_333_3,
            0.742_999_123,
            SentimentLabel::Positive,
        ),
        result(
            "Markets tumble amid recession fears",
            0.0,
            0.0,
            -0.831_6,
            SentimentLabel::Negative,
        ),
    ]
}
