use std::fs::{File, OpenOptions};
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("refusing to overwrite existing report {path}")]
    AlreadyExists { path: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("chart rendering error: {0}")]
    Chart(String),
}

impl ReportError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        ReportError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Open `path` for writing, failing if it already exists.
pub(crate) fn create_new(path: &Path) -> Result<File, ReportError> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::AlreadyExists {
                ReportError::AlreadyExists {
                    path: path.display().to_string(),
                }
            } else {
                ReportError::io(path, e)
            }
        })
}
