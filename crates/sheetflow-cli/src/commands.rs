//! Command handlers wiring CLI arguments to the pipeline.

use anyhow::Result;

use sheetflow_submit::SubmitPolicy;

use sheetflow_cli::pipeline::{ImportOptions, ImportOutcome, run_import, run_map};

use crate::cli::{ImportArgs, MapArgs};
use crate::summary::{print_import_outcome, print_mapping};

pub fn handle_map(args: &MapArgs) -> Result<()> {
    let review = run_map(&args.template, &args.file, args.header_row)?;
    print_mapping(&review);
    Ok(())
}

pub fn handle_import(args: &ImportArgs) -> Result<ImportOutcome> {
    let options = ImportOptions {
        template_path: args.template.clone(),
        file_path: args.file.clone(),
        header_row_index: args.header_row,
        policy: SubmitPolicy {
            filter_invalid_rows: args.filter_invalid_rows,
            disable_on_invalid_rows: args.fail_on_invalid_rows,
        },
        output: args.output.clone(),
        dry_run: args.dry_run,
    };
    let outcome = run_import(&options)?;
    print_import_outcome(&outcome);
    Ok(outcome)
}
