//! Sparse overlay of per-cell manual corrections.

use std::collections::BTreeMap;

/// User corrections keyed by `(data_row_index, column_index)`.
///
/// Absence means "use the original parsed value". Entries are only ever
/// replaced, never removed; the original sheet is never mutated.
#[derive(Debug, Clone, Default)]
pub struct EditOverlay {
    edits: BTreeMap<(usize, usize), String>,
}

impl EditOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a correction. Overwrites are idempotent per key.
    pub fn set(&mut self, data_row_index: usize, column_index: usize, value: impl Into<String>) {
        self.edits.insert((data_row_index, column_index), value.into());
    }

    /// The correction for a cell, if one was made.
    pub fn get(&self, data_row_index: usize, column_index: usize) -> Option<&str> {
        self.edits
            .get(&(data_row_index, column_index))
            .map(String::as_str)
    }

    /// The value validation and submission should see for a cell.
    pub fn effective<'a>(
        &'a self,
        data_row_index: usize,
        column_index: usize,
        original: &'a str,
    ) -> &'a str {
        self.get(data_row_index, column_index).unwrap_or(original)
    }

    /// Corrections for one data row, in column order.
    pub fn row_edits(&self, data_row_index: usize) -> impl Iterator<Item = (usize, &str)> {
        self.edits
            .range((data_row_index, 0)..=(data_row_index, usize::MAX))
            .map(|(&(_, column), value)| (column, value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }
}
