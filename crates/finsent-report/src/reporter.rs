//! Writes every artifact for one run.

use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use finsent_core::SentimentResult;

use crate::chart::render_chart;
use crate::error::ReportError;
use crate::summary::{count_labels, summarize, SentimentSummary};
use crate::table::write_csv;
use crate::xlsx::write_xlsx;

pub const REPORT_PREFIX: &str = "financial_sentiment_report";
pub const CHART_FILENAME: &str = "sentiment_distribution.png";
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Paths written by one report plus the computed summary.
#[derive(Debug, Clone)]
pub struct ReportArtifacts {
    pub csv_path: PathBuf,
    pub xlsx_path: PathBuf,
    pub chart_path: PathBuf,
    pub summary: SentimentSummary,
}

#[derive(Debug, Clone)]
pub struct Reporter {
    output_dir: PathBuf,
}

impl Reporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Report stamped with the current local time.
    ///
    /// # Errors
    ///
    /// See [`Reporter::report_at`].
    pub fn report(
        &self,
        results: &[SentimentResult],
    ) -> Result<Option<ReportArtifacts>, ReportError> {
        self.report_at(results, Local::now().naive_local())
    }

    /// Write the CSV, XLSX and chart for `results` and log the summary.
    ///
    /// Returns `Ok(None)` without touching the filesystem when `results` is
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::AlreadyExists`] if a report with the same
    /// timestamp already exists, or another [`ReportError`] if any artifact
    /// cannot be written.
    pub fn report_at(
        &self,
        results: &[SentimentResult],
        timestamp: NaiveDateTime,
    ) -> Result<Option<ReportArtifacts>, ReportError> {
        if results.is_empty() {
            tracing::warn!("No data to save.");
            return Ok(None);
        }

        std::fs::create_dir_all(&self.output_dir)
            .map_err(|e| ReportError::io(&self.output_dir, e))?;

        let stamp = timestamp.format(TIMESTAMP_FORMAT).to_string();
        let csv_path = self.output_dir.join(format!("{REPORT_PREFIX}_{stamp}.csv"));
        let xlsx_path = self
            .output_dir
            .join(format!("{REPORT_PREFIX}_{stamp}.xlsx"));
        let chart_path = self.output_dir.join(CHART_FILENAME);

        write_csv(&csv_path, results)?;
        tracing::info!(path = %csv_path.display(), rows = results.len(), "Data saved to CSV");

        write_xlsx(&xlsx_path, results)?;
        tracing::info!(path = %xlsx_path.display(), rows = results.len(), "Data saved to XLSX");

        render_chart(&chart_path, &count_labels(results))?;
        tracing::info!(path = %chart_path.display(), "Sentiment chart saved");

        let summary = summarize(results);
        summary.log();

        Ok(Some(ReportArtifacts {
            csv_path,
            xlsx_path,
            chart_path,
            summary,
        }))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use finsent_core::SentimentLabel;

    use super::*;
    use crate::table::read_csv;
    use crate::test_support::{sample_results, scratch_dir};

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .and_then(|d| d.and_hms_opt(h, m, s))
            .expect("valid timestamp")
    }

    #[test]
    fn empty_results_write_nothing() {
        let dir = scratch_dir("reporter-empty");
        let reporter = Reporter::new(&dir);

        let artifacts = reporter.report_at(&[], at(9, 0, 0)).expect("report");
        assert!(artifacts.is_none());
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
    }

    #[test]
    fn writes_all_artifacts_with_timestamped_names() {
        let dir = scratch_dir("reporter-artifacts");
        let reporter = Reporter::new(&dir);

        let artifacts = reporter
            .report_at(&sample_results(), at(14, 7, 9))
            .expect("report")
            .expect("artifacts");

        assert_eq!(
            artifacts.csv_path,
            dir.join("financial_sentiment_report_20240305_140709.csv")
        );
        assert_eq!(
            artifacts.xlsx_path,
            dir.join("financial_sentiment_report_20240305_140709.xlsx")
        );
        assert_eq!(artifacts.chart_path, dir.join(CHART_FILENAME));
        assert!(artifacts.xlsx_path.is_file());
        assert!(artifacts.chart_path.is_file());

        let rows = read_csv(&artifacts.csv_path).expect("read csv");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, SentimentLabel::Positive);
        assert_eq!(rows[1].label, SentimentLabel::Negative);

        let positive = artifacts.summary.share(SentimentLabel::Positive).unwrap();
        assert!((positive.percent - 50.0).abs() < 1e-9);
    }

    #[test]
    fn same_second_collision_is_an_error() {
        let dir = scratch_dir("reporter-collision");
        let reporter = Reporter::new(&dir);
        let results = sample_results();

        reporter.report_at(&results, at(10, 0, 0)).expect("first report");
        let err = reporter.report_at(&results, at(10, 0, 0)).unwrap_err();
        assert!(matches!(err, ReportError::AlreadyExists { .. }));
    }

    #[test]
    fn later_run_keeps_earlier_reports_and_replaces_chart() {
        let dir = scratch_dir("reporter-two-runs");
        let reporter = Reporter::new(&dir);
        let results = sample_results();

        let first = reporter.report_at(&results, at(10, 0, 0)).unwrap().unwrap();
        let second = reporter.report_at(&results, at(10, 0, 1)).unwrap().unwrap();

        assert!(first.csv_path.is_file());
        assert!(second.csv_path.is_file());
        assert_ne!(first.csv_path, second.csv_path);
        assert_eq!(first.chart_path, second.chart_path);
    }

    #[test]
    fn creates_missing_output_dir() {
        let dir = scratch_dir("reporter-nested").join("reports");
        let reporter = Reporter::new(&dir);
        let artifacts = reporter.report_at(&sample_results(), at(8, 30, 0)).unwrap();
        assert!(artifacts.is_some());
        assert!(dir.is_dir());
    }
}
