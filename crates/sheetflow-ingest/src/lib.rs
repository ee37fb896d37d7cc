pub mod csv_sheet;
pub mod error;
pub mod template;

pub use csv_sheet::{build_upload_columns, read_csv_sheet, write_csv_rows};
pub use error::IngestError;
pub use template::{TemplateError, parse_template_str, parse_template_value, sanitize_key};
