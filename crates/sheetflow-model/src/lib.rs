pub mod field;
pub mod mapping;
pub mod sheet;
pub mod validation;

pub use field::{BooleanFormat, FieldType, Template, TemplateField};
pub use mapping::{ColumnMapping, MappingChoice};
pub use sheet::{Row, Sheet, UploadColumn};
pub use validation::ValidationError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_type_resolves_aliases() {
        assert_eq!(FieldType::resolve("number", ""), FieldType::Number);
        assert_eq!(FieldType::resolve("", "numeric"), FieldType::Number);
        assert_eq!(FieldType::resolve("bool", ""), FieldType::Boolean);
        assert_eq!(FieldType::resolve("datetime", ""), FieldType::Date);
        assert_eq!(FieldType::resolve("enum", ""), FieldType::Select);
        assert_eq!(FieldType::resolve("", ""), FieldType::Text);
        assert_eq!(FieldType::resolve("geolocation", ""), FieldType::Text);
    }

    #[test]
    fn template_field_serializes() {
        let field = TemplateField {
            key: "first_name".to_string(),
            name: "First Name".to_string(),
            field_type: FieldType::Text,
            required: true,
            validation_format: String::new(),
        };
        let json = serde_json::to_string(&field).expect("serialize field");
        let round: TemplateField = serde_json::from_str(&json).expect("deserialize field");
        assert_eq!(round.key, "first_name");
        assert!(round.required);
    }
}
