//! Parsed sheet types: rows of cells and per-column descriptors.

use serde::{Deserialize, Serialize};

/// One row of the uploaded sheet. `index` is the row's position in the full
/// original sheet and stays stable for the life of the import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub index: usize,
    pub values: Vec<String>,
}

impl Row {
    /// Cell value at a column position; a missing trailing cell reads as empty.
    pub fn value(&self, column_index: usize) -> &str {
        self.values.get(column_index).map_or("", String::as_str)
    }
}

/// The full parsed sheet, header row included.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sheet {
    pub rows: Vec<Row>,
}

impl Sheet {
    /// The row the user selected as the header.
    pub fn header_row(&self, header_row_index: usize) -> Option<&Row> {
        self.rows.get(header_row_index)
    }

    /// All rows below the header, in sheet order.
    pub fn data_rows(&self, header_row_index: usize) -> &[Row] {
        let start = (header_row_index + 1).min(self.rows.len());
        &self.rows[start..]
    }
}

/// One column of the uploaded sheet, identified by position and header text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadColumn {
    /// 0-based column position, stable for the life of the import.
    pub index: usize,
    /// Header text; may be empty.
    pub name: String,
    /// Preview values for mapping review, non-values already filtered out.
    pub sample_values: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> Sheet {
        Sheet {
            rows: vec![
                Row {
                    index: 0,
                    values: vec!["name".to_string(), "age".to_string()],
                },
                Row {
                    index: 1,
                    values: vec!["Ada".to_string()],
                },
            ],
        }
    }

    #[test]
    fn short_rows_read_as_empty_cells() {
        let sheet = sheet();
        assert_eq!(sheet.rows[1].value(0), "Ada");
        assert_eq!(sheet.rows[1].value(1), "");
        assert_eq!(sheet.rows[1].value(7), "");
    }

    #[test]
    fn data_rows_start_below_header() {
        let sheet = sheet();
        assert_eq!(sheet.data_rows(0).len(), 1);
        assert_eq!(sheet.data_rows(1).len(), 0);
        assert_eq!(sheet.data_rows(9).len(), 0);
    }
}
