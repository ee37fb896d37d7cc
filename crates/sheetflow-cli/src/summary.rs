//! Terminal summaries for mapping review and validation results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sheetflow_model::ValidationError;

use sheetflow_cli::pipeline::{ImportOutcome, MappingReview};

/// Cap on per-cell error rows printed; the totals line carries the rest.
const ERROR_TABLE_LIMIT: usize = 50;

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

pub fn print_mapping(review: &MappingReview) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Your File Column"),
        header_cell("Sample Data"),
        header_cell("Destination Column"),
        header_cell("Include"),
    ]);
    apply_table_style(&mut table);

    for column in &review.columns {
        let choice = review.state.choice(column.index);
        let (destination, included) = match choice {
            Some(choice) if !choice.template_key.is_empty() => {
                (choice.template_key.as_str(), choice.included)
            }
            _ => ("-", false),
        };
        table.add_row(vec![
            Cell::new(column.index).set_alignment(CellAlignment::Right),
            Cell::new(&column.name),
            Cell::new(column.sample_values.join(", ")),
            Cell::new(destination),
            Cell::new(if included { "yes" } else { "no" })
                .set_alignment(CellAlignment::Center),
        ]);
    }
    println!("{table}");

    let summary = review.summary();
    println!(
        "Mapped {} of {} columns; required fields covered: {}/{}",
        summary.mapped, summary.total_columns, summary.required_mapped, summary.required_total
    );
}

pub fn print_errors(errors: &[ValidationError]) {
    if errors.is_empty() {
        println!("No validation errors");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Column"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);

    for error in errors.iter().take(ERROR_TABLE_LIMIT) {
        table.add_row(vec![
            Cell::new(error.display_row_index).set_alignment(CellAlignment::Right),
            Cell::new(error.column_index).set_alignment(CellAlignment::Right),
            Cell::new(&error.message).fg(Color::Red),
        ]);
    }
    println!("{table}");

    if errors.len() > ERROR_TABLE_LIMIT {
        println!("... and {} more", errors.len() - ERROR_TABLE_LIMIT);
    }
    let noun = if errors.len() == 1 { "error" } else { "errors" };
    println!("{} {noun} found", errors.len());
}

pub fn print_import_outcome(outcome: &ImportOutcome) {
    print_errors(&outcome.errors);
    if outcome.error_row_count > 0 {
        println!(
            "{} of {} data rows have errors",
            outcome.error_row_count, outcome.data_row_count
        );
    }
    if outcome.blocked {
        eprintln!("Submission blocked: fix the errors above or drop --fail-on-invalid-rows");
        return;
    }
    match &outcome.written {
        Some((path, rows)) => {
            println!("Wrote {} rows (header included) to {}", rows, path.display());
        }
        None => println!("Dry run: no output written"),
    }
}
