//! Spreadsheet output.

use std::io::Write;
use std::path::Path;

use finsent_core::SentimentResult;
use rust_xlsxwriter::{Format, Workbook};

use crate::error::{create_new, ReportError};
use crate::table::HEADERS;

const SHEET_NAME: &str = "Sentiment";
const HEADLINE_COLUMN_WIDTH: f64 = 80.0;
const SCORE_COLUMN_WIDTH: f64 = 22.0;

/// Write `results` to a new XLSX workbook at `path` with a bold header row
/// followed by one row per result. Scores are stored as numbers.
///
/// # Errors
///
/// Returns [`ReportError::AlreadyExists`] if `path` exists, or another
/// [`ReportError`] if the workbook cannot be built or written.
pub fn write_xlsx(path: &Path, results: &[SentimentResult]) -> Result<(), ReportError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;
    worksheet.set_column_width(0, HEADLINE_COLUMN_WIDTH)?;
    for col in 1..=4u16 {
        worksheet.set_column_width(col, SCORE_COLUMN_WIDTH)?;
    }

    for (col, title) in (0u16..).zip(HEADERS) {
        worksheet.write_string_with_format(0, col, title, &header_format)?;
    }

    for (row, result) in (1u32..).zip(results) {
        worksheet.write_string(row, 0, result.headline.as_str())?;
        worksheet.write_number(row, 1, result.polarity)?;
        worksheet.write_number(row, 2, result.subjectivity)?;
        worksheet.write_number(row, 3, result.compound)?;
        worksheet.write_string(row, 4, result.label.as_str())?;
    }

    let buffer = workbook.save_to_buffer()?;
    let mut file = create_new(path)?;
    file.write_all(&buffer)
        .map_err(|e| ReportError::io(path, e))?;
    Ok(())
}
