//! Column-to-field mapping types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Destination choice for a single upload column.
///
/// `included` is true only while `template_key` is non-empty; a column with
/// no destination still travels with the row but is excluded from validation
/// and from the payload's semantic interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingChoice {
    pub template_key: String,
    pub included: bool,
    pub selected: bool,
}

impl MappingChoice {
    /// A choice pointing at a template field.
    pub fn mapped(template_key: impl Into<String>) -> Self {
        Self {
            template_key: template_key.into(),
            included: true,
            selected: true,
        }
    }

    /// A column left without a destination.
    pub fn unmapped() -> Self {
        Self {
            template_key: String::new(),
            included: false,
            selected: true,
        }
    }
}

/// Per-upload-column mapping, keyed by `UploadColumn::index`.
///
/// Two columns may reference the same template key; the engine tolerates
/// this (the auto-mapper only avoids duplicates during its own pass).
pub type ColumnMapping = BTreeMap<usize, MappingChoice>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapped_choice_is_included_and_selected() {
        let choice = MappingChoice::mapped("email");
        assert!(choice.included);
        assert!(choice.selected);
        assert_eq!(choice.template_key, "email");
    }

    #[test]
    fn unmapped_choice_is_excluded_but_selected() {
        let choice = MappingChoice::unmapped();
        assert!(!choice.included);
        assert!(choice.selected);
        assert!(choice.template_key.is_empty());
    }
}
