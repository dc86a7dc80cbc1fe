//! Tabular CSV output.

use std::path::Path;

use finsent_core::{SentimentLabel, SentimentResult};
use serde::{Deserialize, Serialize};

use crate::error::{create_new, ReportError};

/// Column headers shared by the CSV and XLSX reports, in column order.
pub const HEADERS: [&str; 5] = [
    "Headline",
    "TextBlob Polarity",
    "TextBlob Subjectivity",
    "VADER Compound Score",
    "Overall Sentiment",
];

/// One report row. Field renames must stay in step with [`HEADERS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(rename = "Headline")]
    pub headline: String,
    #[serde(rename = "TextBlob Polarity")]
    pub polarity: f64,
    #[serde(rename = "TextBlob Subjectivity")]
    pub subjectivity: f64,
    #[serde(rename = "VADER Compound Score")]
    pub compound: f64,
    #[serde(rename = "Overall Sentiment")]
    pub label: SentimentLabel,
}

impl From<&SentimentResult> for ReportRow {
    fn from(result: &SentimentResult) -> Self {
        Self {
            headline: result.headline.as_str().to_string(),
            polarity: result.polarity,
            subjectivity: result.subjectivity,
            compound: result.compound,
            label: result.label,
        }
    }
}

/// Write `results` to a new CSV file at `path`, one row per result in input
/// order. Fails with [`ReportError::AlreadyExists`] if the file exists.
///
/// # Errors
///
/// Returns [`ReportError`] if the file cannot be created or a row fails to
/// serialize.
pub fn write_csv(path: &Path, results: &[SentimentResult]) -> Result<(), ReportError> {
    let file = create_new(path)?;
    let mut writer = csv::Writer::from_writer(file);
    if results.is_empty() {
        writer.write_record(HEADERS)?;
    }
    for result in results {
        writer.serialize(ReportRow::from(result))?;
    }
    writer.flush().map_err(|e| ReportError::io(path, e))?;
    Ok(())
}

/// Read a report CSV written by [`write_csv`].
///
/// # Errors
///
/// Returns [`ReportError`] if the file cannot be opened or a row does not
/// match the report layout.
pub fn read_csv(path: &Path) -> Result<Vec<ReportRow>, ReportError> {
    let mut reader = csv::Reader::from_path(path)?;
    let rows = reader
        .deserialize::<ReportRow>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}
