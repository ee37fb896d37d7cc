//! Interactive import session.
//!
//! Owns one mapping/validation workflow end to end: the proposed mapping,
//! the edit overlay, and the current error list. Single-threaded and
//! synchronous; every mutating operation re-runs validation to completion
//! before returning, so the error list always reflects the latest state.

use tracing::info;

use sheetflow_map::MappingState;
use sheetflow_model::{Row, Sheet, Template, UploadColumn, ValidationError};
use sheetflow_validate::{EditOverlay, error_row_offsets, validate, visible_rows};

use crate::assemble::assemble;
use crate::error::SubmitError;

/// User-chosen error-handling policy for submission.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmitPolicy {
    /// Drop rows carrying validation errors from the final payload.
    pub filter_invalid_rows: bool,
    /// Refuse submission entirely while any validation error remains.
    pub disable_on_invalid_rows: bool,
}

/// One import session over a parsed sheet and a validated template.
#[derive(Debug)]
pub struct ImportSession {
    template: Template,
    sheet: Sheet,
    header_row_index: usize,
    mapping: MappingState,
    overlay: EditOverlay,
    errors: Vec<ValidationError>,
    policy: SubmitPolicy,
}

impl ImportSession {
    /// Start a session: run the auto-mapper over the sheet's columns and
    /// validate the initial state.
    pub fn new(
        template: Template,
        sheet: Sheet,
        upload_columns: &[UploadColumn],
        header_row_index: usize,
        policy: SubmitPolicy,
    ) -> Result<Self, SubmitError> {
        if sheet.header_row(header_row_index).is_none() {
            return Err(SubmitError::HeaderOutOfRange {
                header_row_index,
                row_count: sheet.rows.len(),
            });
        }

        let mapping = MappingState::propose(upload_columns, &template.columns);
        let mut session = Self {
            template,
            sheet,
            header_row_index,
            mapping,
            overlay: EditOverlay::new(),
            errors: Vec::new(),
            policy,
        };
        session.revalidate();
        Ok(session)
    }

    fn revalidate(&mut self) {
        self.errors = validate(
            &self.template,
            self.mapping.mapping(),
            self.sheet.data_rows(self.header_row_index),
            &self.overlay,
            self.header_row_index,
        );
    }

    /// Change the destination field of an upload column.
    pub fn set_field(&mut self, upload_column_index: usize, template_key: &str) {
        self.mapping.set_field(upload_column_index, template_key);
        self.revalidate();
    }

    /// Toggle a column's inclusion (no-op without a destination field).
    pub fn set_included(&mut self, upload_column_index: usize, included: bool) {
        self.mapping.set_included(upload_column_index, included);
        self.revalidate();
    }

    /// Record a manual correction for one cell.
    pub fn edit_cell(&mut self, data_row_index: usize, column_index: usize, value: &str) {
        self.overlay.set(data_row_index, column_index, value);
        self.revalidate();
    }

    /// Current mapping state.
    pub fn mapping(&self) -> &MappingState {
        &self.mapping
    }

    /// Current error list, reflecting the most recent mutation.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Count of distinct data rows carrying at least one error.
    pub fn error_row_count(&self) -> usize {
        error_row_offsets(&self.errors, self.header_row_index, self.data_row_count()).len()
    }

    /// Rows to display, optionally restricted to those carrying errors.
    pub fn visible_rows(&self, show_only_errors: bool) -> Vec<&Row> {
        visible_rows(
            self.sheet.data_rows(self.header_row_index),
            &self.errors,
            self.header_row_index,
            show_only_errors,
        )
    }

    fn data_row_count(&self) -> usize {
        self.sheet.data_rows(self.header_row_index).len()
    }

    /// Assemble the final payload under the session's policy.
    ///
    /// With `disable_on_invalid_rows` set and errors outstanding, the
    /// assembler is never invoked and submission fails.
    pub fn submit(&self) -> Result<Vec<Row>, SubmitError> {
        if self.policy.disable_on_invalid_rows && !self.errors.is_empty() {
            return Err(SubmitError::BlockedByErrors {
                error_count: self.errors.len(),
            });
        }

        let data_rows = self.sheet.data_rows(self.header_row_index);
        let error_rows = error_row_offsets(&self.errors, self.header_row_index, data_rows.len());
        // Checked at construction.
        let header_row = match self.sheet.header_row(self.header_row_index) {
            Some(row) => row,
            None => {
                return Err(SubmitError::HeaderOutOfRange {
                    header_row_index: self.header_row_index,
                    row_count: self.sheet.rows.len(),
                });
            }
        };

        let rows = assemble(
            header_row,
            data_rows,
            &self.overlay,
            self.policy.filter_invalid_rows,
            &error_rows,
        );
        info!(
            rows = rows.len(),
            filtered = self.policy.filter_invalid_rows,
            "assembled final payload"
        );
        Ok(rows)
    }
}
