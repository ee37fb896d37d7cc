//! Template parsing and structural validation.
//!
//! A template arrives as a JSON object (or a JSON string wrapping one) with a
//! `columns` array. Structural problems are fatal: no partial template is
//! ever accepted, so the mapping and validation stages only see valid input.

use serde_json::Value;
use thiserror::Error;

use sheetflow_model::{FieldType, Template, TemplateField};

/// Structural template errors, detected once at template-load time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("The parameter 'template' is required. Please check the documentation for more details.")]
    Missing,
    #[error("Invalid template: could not parse JSON: {0}")]
    Json(String),
    #[error("Invalid template: No columns provided")]
    NoColumns,
    #[error("Invalid template: columns should be an array of objects")]
    ColumnsNotArray,
    #[error("Invalid template: Each item in columns should be an object (check column {0})")]
    ColumnNotObject(usize),
    #[error("Invalid template: The parameter \"name\" is required for each column (check column {0})")]
    MissingName(usize),
    #[error("Invalid template: Duplicate keys are not allowed (check column {0})")]
    DuplicateKey(usize),
    #[error("Invalid template: No columns were provided")]
    Empty,
}

/// Parse a template from raw JSON text.
///
/// A top-level JSON string is unwrapped and parsed again, matching how the
/// embedding page may pass the template through as an attribute.
pub fn parse_template_str(raw: &str) -> Result<Template, TemplateError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|err| TemplateError::Json(err.to_string()))?;
    let value = match value {
        Value::String(inner) => {
            serde_json::from_str(&inner).map_err(|err| TemplateError::Json(err.to_string()))?
        }
        other => other,
    };
    parse_template_value(&value)
}

/// Parse a template from an already-decoded JSON value.
pub fn parse_template_value(value: &Value) -> Result<Template, TemplateError> {
    let object = value.as_object().ok_or(TemplateError::Missing)?;
    if object.is_empty() {
        return Err(TemplateError::Missing);
    }

    let column_data = object.get("columns").ok_or(TemplateError::NoColumns)?;
    let items = column_data
        .as_array()
        .ok_or(TemplateError::ColumnsNotArray)?;

    let mut seen_keys: Vec<String> = Vec::new();
    let mut columns = Vec::with_capacity(items.len());

    for (position, item) in items.iter().enumerate() {
        let item = item
            .as_object()
            .ok_or(TemplateError::ColumnNotObject(position))?;

        let name = string_field(item, "name");
        if name.is_empty() {
            return Err(TemplateError::MissingName(position));
        }

        let mut key = string_field(item, "key");
        if key.is_empty() {
            key = sanitize_key(&name);
        }
        if seen_keys.iter().any(|seen| seen == &key) {
            return Err(TemplateError::DuplicateKey(position));
        }
        seen_keys.push(key.clone());

        let type_name = string_field(item, "type");
        let data_type = string_field(item, "data_type");
        let required = item.get("required").and_then(Value::as_bool).unwrap_or(false);
        let validation_format = string_field(item, "validation_format");

        columns.push(TemplateField {
            key,
            name,
            field_type: FieldType::resolve(&type_name, &data_type),
            required,
            validation_format,
        });
    }

    if columns.is_empty() {
        return Err(TemplateError::Empty);
    }

    Ok(Template { columns })
}

fn string_field(item: &serde_json::Map<String, Value>, key: &str) -> String {
    item.get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

/// Derive a stable key from a display name: lowercased, with runs of
/// non-alphanumeric characters collapsed to single underscores.
pub fn sanitize_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    let mut last_was_separator = true;
    for ch in name.trim().to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            key.push(ch);
            last_was_separator = false;
        } else if !last_was_separator {
            key.push('_');
            last_was_separator = true;
        }
    }
    while key.ends_with('_') {
        key.pop();
    }
    key
}
