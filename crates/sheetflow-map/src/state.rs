//! Mutable mapping state for the user-facing mapping step.
//!
//! Owns the [`ColumnMapping`] produced by the auto-mapper and applies the
//! user's refinements. Duplicate destinations are tolerated here: only the
//! auto-mapper's own pass avoids them.

use sheetflow_model::{ColumnMapping, MappingChoice, Template, TemplateField, UploadColumn};

use crate::auto::propose;

/// User-editable refinement of an auto-proposed mapping.
#[derive(Debug, Clone)]
pub struct MappingState {
    mapping: ColumnMapping,
}

impl MappingState {
    /// Start from an existing mapping.
    pub fn new(mapping: ColumnMapping) -> Self {
        Self { mapping }
    }

    /// Run the auto-mapper and own its proposal.
    pub fn propose(upload_columns: &[UploadColumn], template_fields: &[TemplateField]) -> Self {
        Self::new(propose(upload_columns, template_fields))
    }

    /// Current mapping, keyed by upload column index.
    pub fn mapping(&self) -> &ColumnMapping {
        &self.mapping
    }

    /// Consume the state, yielding the mapping.
    pub fn into_mapping(self) -> ColumnMapping {
        self.mapping
    }

    /// The choice for one upload column, if any.
    pub fn choice(&self, upload_column_index: usize) -> Option<&MappingChoice> {
        self.mapping.get(&upload_column_index)
    }

    /// Set the destination field for a column. `included` and `selected`
    /// follow the presence of a non-empty key.
    pub fn set_field(&mut self, upload_column_index: usize, template_key: &str) {
        let has_key = !template_key.is_empty();
        let choice = self.mapping.entry(upload_column_index).or_default();
        choice.template_key = template_key.to_string();
        choice.included = has_key;
        choice.selected = has_key;
    }

    /// Toggle inclusion. Forcing `true` with no destination key is a no-op:
    /// inclusion is always gated on a destination being set.
    pub fn set_included(&mut self, upload_column_index: usize, included: bool) {
        if let Some(choice) = self.mapping.get_mut(&upload_column_index) {
            choice.included = !choice.template_key.is_empty() && included;
        }
    }

    /// Indices of columns that take part in validation and interpretation.
    pub fn included_columns(&self) -> Vec<usize> {
        self.mapping
            .iter()
            .filter(|(_, choice)| choice.included)
            .map(|(&index, _)| index)
            .collect()
    }

    /// Summary counts for mapping review.
    pub fn summary(&self, template: &Template) -> MappingSummary {
        let mapped = self
            .mapping
            .values()
            .filter(|choice| choice.included)
            .count();
        let required_total = template.columns.iter().filter(|col| col.required).count();
        let required_mapped = template
            .columns
            .iter()
            .filter(|col| {
                col.required
                    && self
                        .mapping
                        .values()
                        .any(|choice| choice.included && choice.template_key == col.key)
            })
            .count();

        MappingSummary {
            total_columns: self.mapping.len(),
            mapped,
            required_total,
            required_mapped,
        }
    }
}

/// Mapping review counts.
#[derive(Debug, Clone, Copy)]
pub struct MappingSummary {
    /// Upload columns in the sheet.
    pub total_columns: usize,
    /// Columns with an included destination.
    pub mapped: usize,
    /// Required template fields.
    pub required_total: usize,
    /// Required template fields covered by an included column.
    pub required_mapped: usize,
}
