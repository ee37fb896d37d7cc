//! Submission assembler: merges the sheet with the edit overlay.

use std::collections::BTreeSet;

use sheetflow_model::Row;
use sheetflow_validate::EditOverlay;

/// Build the final row set: each data row with its overlay corrections
/// applied, rows carrying errors dropped when `filter_invalid_rows` is set,
/// and the unedited header row prepended.
///
/// `error_row_offsets` holds 0-based data-row positions. Policy is the
/// caller's concern: when submission is disabled on invalid rows, the caller
/// refuses to invoke the assembler at all.
pub fn assemble(
    header_row: &Row,
    data_rows: &[Row],
    overlay: &EditOverlay,
    filter_invalid_rows: bool,
    error_row_offsets: &BTreeSet<usize>,
) -> Vec<Row> {
    let mut out = Vec::with_capacity(data_rows.len() + 1);
    out.push(header_row.clone());

    for (offset, row) in data_rows.iter().enumerate() {
        if filter_invalid_rows && error_row_offsets.contains(&offset) {
            continue;
        }

        let mut values = row.values.clone();
        for (column_index, value) in overlay.row_edits(offset) {
            if column_index >= values.len() {
                values.resize(column_index + 1, String::new());
            }
            values[column_index] = value.to_string();
        }

        out.push(Row {
            index: row.index,
            values,
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(index: usize, values: &[&str]) -> Row {
        Row {
            index,
            values: values.iter().map(|v| (*v).to_string()).collect(),
        }
    }

    #[test]
    fn overlays_edits_and_prepends_header() {
        let header = row(0, &["name", "age"]);
        let data = vec![row(1, &["Ada", "36"]), row(2, &["Grace", "x"])];
        let mut overlay = EditOverlay::new();
        overlay.set(1, 1, "85");

        let out = assemble(&header, &data, &overlay, false, &BTreeSet::new());
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], header);
        assert_eq!(out[1].values, vec!["Ada", "36"]);
        assert_eq!(out[2].values, vec!["Grace", "85"]);
        // Originals untouched.
        assert_eq!(data[1].values, vec!["Grace", "x"]);
    }

    #[test]
    fn filtering_drops_error_rows_only() {
        let header = row(0, &["name"]);
        let data = vec![row(1, &["Ada"]), row(2, &[""]), row(3, &["Tony"])];
        let error_rows: BTreeSet<usize> = [1].into_iter().collect();

        let out = assemble(&header, &data, &EditOverlay::new(), true, &error_rows);
        assert_eq!(out.len(), 3);
        assert_eq!(out[1].index, 1);
        assert_eq!(out[2].index, 3);

        let unfiltered = assemble(&header, &data, &EditOverlay::new(), false, &error_rows);
        assert_eq!(unfiltered.len(), 4);
    }

    #[test]
    fn edits_beyond_the_row_width_extend_it() {
        let header = row(0, &["a", "b", "c"]);
        let data = vec![row(1, &["1"])];
        let mut overlay = EditOverlay::new();
        overlay.set(0, 2, "extra");

        let out = assemble(&header, &data, &overlay, false, &BTreeSet::new());
        assert_eq!(out[1].values, vec!["1", "", "extra"]);
    }
}
