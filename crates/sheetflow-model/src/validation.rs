//! Validation error type shared between the engine and its consumers.

use serde::{Deserialize, Serialize};

/// One cell-level validation error.
///
/// `display_row_index` is expressed in the coordinate space of the full
/// original sheet (header offset included), not the filtered data-row
/// position: `data_row_offset + header_row_index + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub display_row_index: usize,
    pub column_index: usize,
    pub message: String,
}

impl ValidationError {
    /// Map the display row index back to a data-row offset, if it lands
    /// inside the data region.
    pub fn data_row_offset(&self, header_row_index: usize) -> Option<usize> {
        self.display_row_index.checked_sub(header_row_index + 1)
    }
}
