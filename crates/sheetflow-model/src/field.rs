//! Template schema types: the destination a sheet is imported into.

use serde::{Deserialize, Serialize};

/// Validated cell type of a template field.
///
/// Resolved once at template-parse time from the raw `type` string (with the
/// legacy `data_type` alias as a fallback). Unknown or empty types fall back
/// to [`FieldType::Text`], which carries no type check of its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Number,
    Boolean,
    Date,
    Email,
    Select,
}

impl FieldType {
    /// Resolve a field type from the raw `type` value, preferring it over the
    /// legacy `data_type` alias.
    pub fn resolve(type_name: &str, data_type: &str) -> Self {
        let raw = if type_name.is_empty() { data_type } else { type_name };
        match raw.trim().to_lowercase().as_str() {
            "number" | "numeric" => Self::Number,
            "boolean" | "bool" => Self::Boolean,
            "date" | "datetime" => Self::Date,
            "email" => Self::Email,
            "select" | "enum" => Self::Select,
            _ => Self::Text,
        }
    }
}

/// Accepted literal set for a boolean field, chosen by `validation_format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanFormat {
    TrueFalse,
    YesNo,
    OneZero,
}

impl BooleanFormat {
    /// Parse a format tag. An empty tag defaults to `true/false`; an
    /// unrecognized tag yields `None`, which accepts no value at all.
    pub fn parse(format: &str) -> Option<Self> {
        match format {
            "" | "true/false" => Some(Self::TrueFalse),
            "yes/no" => Some(Self::YesNo),
            "1/0" => Some(Self::OneZero),
            _ => None,
        }
    }

    /// The literal values this format accepts. Membership is exact, not
    /// case-folded beyond the enumerated variants.
    pub fn accepted(self) -> &'static [&'static str] {
        match self {
            Self::TrueFalse => &["true", "false"],
            Self::YesNo => &["yes", "no", "Yes", "No", "YES", "NO"],
            Self::OneZero => &["1", "0"],
        }
    }

    /// Tag used in error messages, e.g. `yes/no`.
    pub fn label(self) -> &'static str {
        match self {
            Self::TrueFalse => "true/false",
            Self::YesNo => "yes/no",
            Self::OneZero => "1/0",
        }
    }
}

/// One destination field of an import template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateField {
    /// Stable identifier, unique within a template.
    pub key: String,
    /// Display label, also used for auto-matching against upload headers.
    pub name: String,
    /// Resolved cell type.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Whether an empty cell is an error.
    pub required: bool,
    /// Type-dependent format string: comma-separated options for `select`,
    /// a [`BooleanFormat`] tag for `boolean`, unused otherwise.
    #[serde(default)]
    pub validation_format: String,
}

/// Destination schema for an import. Always has at least one field once
/// parsed; see `sheetflow-ingest` for the structural checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub columns: Vec<TemplateField>,
}

impl Template {
    /// Look up a field by its stable key.
    pub fn field(&self, key: &str) -> Option<&TemplateField> {
        self.columns.iter().find(|col| col.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_format_defaults_to_true_false() {
        assert_eq!(BooleanFormat::parse(""), Some(BooleanFormat::TrueFalse));
        assert_eq!(BooleanFormat::parse("yes/no"), Some(BooleanFormat::YesNo));
        assert_eq!(BooleanFormat::parse("1/0"), Some(BooleanFormat::OneZero));
        assert_eq!(BooleanFormat::parse("on/off"), None);
    }

    #[test]
    fn type_resolution_prefers_type_over_data_type() {
        assert_eq!(FieldType::resolve("date", "number"), FieldType::Date);
        assert_eq!(FieldType::resolve("", "number"), FieldType::Number);
    }

    #[test]
    fn field_lookup_by_key() {
        let template = Template {
            columns: vec![TemplateField {
                key: "email".to_string(),
                name: "Email".to_string(),
                field_type: FieldType::Email,
                required: false,
                validation_format: String::new(),
            }],
        };
        assert!(template.field("email").is_some());
        assert!(template.field("phone").is_none());
    }
}
