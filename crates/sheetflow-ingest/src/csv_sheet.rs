//! CSV sheet reading and writing.
//!
//! The reader is tolerant of ragged files: records may differ in length,
//! cells are trimmed of whitespace and BOM markers, and all-blank rows are
//! dropped before row indices are assigned.

use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use tracing::debug;

use sheetflow_model::{Row, Sheet, UploadColumn};

use crate::error::IngestError;

/// How many preview values to keep per upload column.
const SAMPLE_VALUE_LIMIT: usize = 3;

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a CSV file into a [`Sheet`].
pub fn read_csv_sheet(path: &Path) -> Result<Sheet, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let values: Vec<String> = record.iter().map(normalize_cell).collect();
        if values.iter().all(String::is_empty) {
            continue;
        }
        rows.push(Row {
            index: rows.len(),
            values,
        });
    }

    if rows.is_empty() {
        return Err(IngestError::EmptySheet {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), rows = rows.len(), "read csv sheet");
    Ok(Sheet { rows })
}

/// Describe the sheet's columns relative to a chosen header row.
///
/// Each column carries its header text and up to [`SAMPLE_VALUE_LIMIT`]
/// non-empty preview values from the rows below the header.
pub fn build_upload_columns(
    sheet: &Sheet,
    header_row_index: usize,
) -> Result<Vec<UploadColumn>, IngestError> {
    let header = sheet
        .header_row(header_row_index)
        .ok_or(IngestError::HeaderOutOfRange {
            header_row_index,
            row_count: sheet.rows.len(),
        })?;
    let data_rows = sheet.data_rows(header_row_index);

    let width = sheet
        .rows
        .iter()
        .map(|row| row.values.len())
        .max()
        .unwrap_or(0);

    let mut columns = Vec::with_capacity(width);
    for index in 0..width {
        let mut sample_values = Vec::new();
        for row in data_rows {
            if sample_values.len() == SAMPLE_VALUE_LIMIT {
                break;
            }
            let value = row.value(index);
            if !value.is_empty() {
                sample_values.push(value.to_string());
            }
        }
        columns.push(UploadColumn {
            index,
            name: header.value(index).to_string(),
            sample_values,
        });
    }
    Ok(columns)
}

/// Write assembled rows back out as CSV.
pub fn write_csv_rows(path: &Path, rows: &[Row]) -> Result<(), IngestError> {
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    for row in rows {
        writer
            .write_record(&row.values)
            .map_err(|source| IngestError::Write {
                path: path.to_path_buf(),
                source,
            })?;
    }
    writer.flush().map_err(|source| IngestError::Write {
        path: path.to_path_buf(),
        source: csv::Error::from(source),
    })?;
    debug!(path = %path.display(), rows = rows.len(), "wrote csv rows");
    Ok(())
}
