//! Greedy auto-mapper: proposes an initial column-to-field mapping.

use std::collections::BTreeSet;

use tracing::debug;

use sheetflow_model::{ColumnMapping, MappingChoice, TemplateField, UploadColumn};

use crate::score::header_matches_key;

/// Propose an initial mapping from upload columns to template fields.
///
/// Greedy, single pass, deterministic: columns are visited in ascending
/// index order and each takes the first not-yet-consumed template field (in
/// declared order) whose key scores above the match threshold against the
/// column header. There is no backtracking, so an earlier column may consume
/// the best match for a later one. The result is a best-effort default a
/// human reviews, not an optimal assignment.
///
/// No template key is assigned to two columns within one proposal pass;
/// manual edits afterwards are free to duplicate destinations.
pub fn propose(upload_columns: &[UploadColumn], template_fields: &[TemplateField]) -> ColumnMapping {
    let mut consumed: BTreeSet<&str> = BTreeSet::new();
    let mut mapping = ColumnMapping::new();

    for column in upload_columns {
        let matched = template_fields.iter().find(|field| {
            !field.key.is_empty()
                && !consumed.contains(field.key.as_str())
                && header_matches_key(&field.key, &column.name)
        });

        let choice = match matched {
            Some(field) => {
                consumed.insert(field.key.as_str());
                debug!(
                    column = column.index,
                    header = %column.name,
                    key = %field.key,
                    "auto-mapped column"
                );
                MappingChoice::mapped(field.key.clone())
            }
            None => MappingChoice::unmapped(),
        };
        mapping.insert(column.index, choice);
    }

    mapping
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetflow_model::FieldType;

    fn field(key: &str) -> TemplateField {
        TemplateField {
            key: key.to_string(),
            name: key.to_string(),
            field_type: FieldType::Text,
            required: false,
            validation_format: String::new(),
        }
    }

    fn column(index: usize, name: &str) -> UploadColumn {
        UploadColumn {
            index,
            name: name.to_string(),
            sample_values: Vec::new(),
        }
    }

    #[test]
    fn exact_headers_map_to_their_fields() {
        let fields = vec![field("first_name"), field("email")];
        let columns = vec![column(0, "First Name"), column(1, "Email")];

        let mapping = propose(&columns, &fields);
        assert_eq!(mapping[&0], MappingChoice::mapped("first_name"));
        assert_eq!(mapping[&1], MappingChoice::mapped("email"));
    }

    #[test]
    fn unmatched_columns_are_excluded_but_selected() {
        let fields = vec![field("email")];
        let columns = vec![column(0, "Shoe Size")];

        let mapping = propose(&columns, &fields);
        assert_eq!(mapping[&0], MappingChoice::unmapped());
    }

    #[test]
    fn a_key_is_never_assigned_twice_in_one_pass() {
        let fields = vec![field("name")];
        let columns = vec![column(0, "Name"), column(1, "name")];

        let mapping = propose(&columns, &fields);
        assert_eq!(mapping[&0], MappingChoice::mapped("name"));
        assert_eq!(mapping[&1], MappingChoice::unmapped());
    }

    #[test]
    fn earlier_columns_steal_close_matches() {
        // Documented greedy limitation: the first column above the threshold
        // wins even when a later column is the exact match.
        let fields = vec![field("email")];
        let columns = vec![column(0, "E-mail"), column(1, "Email")];

        let mapping = propose(&columns, &fields);
        assert_eq!(mapping[&0], MappingChoice::mapped("email"));
        assert_eq!(mapping[&1], MappingChoice::unmapped());
    }

    #[test]
    fn fields_are_scanned_in_declared_order() {
        // Both keys normalize within the threshold of "Phone"; the first
        // declared field wins.
        let fields = vec![field("phone"), field("phones")];
        let columns = vec![column(0, "Phone")];

        let mapping = propose(&columns, &fields);
        assert_eq!(mapping[&0], MappingChoice::mapped("phone"));
    }
}
