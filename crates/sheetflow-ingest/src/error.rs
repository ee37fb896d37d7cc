//! Error types for sheet ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading or writing sheet files.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("read csv {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("write csv {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("sheet is empty: {path}")]
    EmptySheet { path: PathBuf },
    #[error("header row {header_row_index} is out of range ({row_count} rows)")]
    HeaderOutOfRange {
        header_row_index: usize,
        row_count: usize,
    },
}
