//! Error types for submission.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("submission blocked: {error_count} validation error(s) remain")]
    BlockedByErrors { error_count: usize },
    #[error("header row {header_row_index} is out of range ({row_count} rows)")]
    HeaderOutOfRange {
        header_row_index: usize,
        row_count: usize,
    },
}
