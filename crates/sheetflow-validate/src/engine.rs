//! Validation engine: full recomputation over all mapped cells.
//!
//! The engine is a pure function of `(template, mapping, rows, overlay)`;
//! there is no internal cache or incremental invalidation, so re-running it
//! after any mutation is always correct. Callers must re-run it after every
//! mapping or overlay change before trusting the error list.

use std::collections::BTreeSet;

use tracing::debug;

use sheetflow_model::{ColumnMapping, Row, Template, ValidationError};

use crate::overlay::EditOverlay;
use crate::rules::check_cell;

/// Validate every included mapped cell of every data row.
///
/// A mapping entry whose key no longer exists in the template is skipped
/// silently: an orphaned reference is not an error. The effective value of a
/// cell is the overlay entry when present, otherwise the original cell.
pub fn validate(
    template: &Template,
    mapping: &ColumnMapping,
    data_rows: &[Row],
    overlay: &EditOverlay,
    header_row_index: usize,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (data_row_offset, row) in data_rows.iter().enumerate() {
        let display_row_index = data_row_offset + header_row_index + 1;

        for (&column_index, choice) in mapping {
            if !choice.included {
                continue;
            }
            let Some(field) = template.field(&choice.template_key) else {
                continue;
            };

            let original = row.value(column_index);
            let value = overlay.effective(data_row_offset, column_index, original);

            if let Some(message) = check_cell(field, value) {
                errors.push(ValidationError {
                    display_row_index,
                    column_index,
                    message,
                });
            }
        }
    }

    debug!(
        rows = data_rows.len(),
        errors = errors.len(),
        "validated sheet"
    );
    errors
}

/// Data-row offsets (0-based positions within the data region) that carry at
/// least one error. Out-of-range display indices are ignored.
pub fn error_row_offsets(
    errors: &[ValidationError],
    header_row_index: usize,
    data_row_count: usize,
) -> BTreeSet<usize> {
    errors
        .iter()
        .filter_map(|error| error.data_row_offset(header_row_index))
        .filter(|&offset| offset < data_row_count)
        .collect()
}

/// Original sheet indices of the data rows that carry errors.
pub fn error_sheet_indices(
    errors: &[ValidationError],
    header_row_index: usize,
    data_rows: &[Row],
) -> Vec<usize> {
    error_row_offsets(errors, header_row_index, data_rows.len())
        .into_iter()
        .filter_map(|offset| data_rows.get(offset).map(|row| row.index))
        .collect()
}

/// The data rows a review table should display. With `show_only_errors` the
/// rows are restricted to those carrying errors; the row data itself is
/// untouched.
pub fn visible_rows<'a>(
    data_rows: &'a [Row],
    errors: &[ValidationError],
    header_row_index: usize,
    show_only_errors: bool,
) -> Vec<&'a Row> {
    if !show_only_errors {
        return data_rows.iter().collect();
    }
    let offsets = error_row_offsets(errors, header_row_index, data_rows.len());
    data_rows
        .iter()
        .enumerate()
        .filter(|(offset, _)| offsets.contains(offset))
        .map(|(_, row)| row)
        .collect()
}
