//! Report generation for scored headlines.
//!
//! Writes the result set as timestamped CSV and XLSX files, renders a bar
//! chart of label counts, and computes the label distribution summary.

pub mod chart;
pub mod error;
pub mod reporter;
pub mod summary;
pub mod table;
pub mod xlsx;

#[cfg(test)]
mod test_support;

pub use error::ReportError;
pub use reporter::{ReportArtifacts, Reporter, CHART_FILENAME, REPORT_PREFIX};
pub use summary::{count_labels, summarize, LabelShare, SentimentSummary};
pub use table::{read_csv, write_csv, ReportRow, HEADERS};
pub use xlsx::write_xlsx;
