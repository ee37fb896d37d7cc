//! End-to-end import pipeline shared by the CLI commands and tests.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use sheetflow_ingest::{build_upload_columns, parse_template_str, read_csv_sheet, write_csv_rows};
use sheetflow_map::{MappingState, MappingSummary};
use sheetflow_model::{Template, UploadColumn, ValidationError};
use sheetflow_submit::{ImportSession, SubmitError, SubmitPolicy};

/// Options for one import run.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    pub template_path: PathBuf,
    pub file_path: PathBuf,
    pub header_row_index: usize,
    pub policy: SubmitPolicy,
    pub output: Option<PathBuf>,
    pub dry_run: bool,
}

/// What an import run produced.
#[derive(Debug)]
pub struct ImportOutcome {
    pub errors: Vec<ValidationError>,
    pub error_row_count: usize,
    pub data_row_count: usize,
    /// Set when a payload was written: path and row count (header included).
    pub written: Option<(PathBuf, usize)>,
    /// Submission was refused by the `disable_on_invalid_rows` policy.
    pub blocked: bool,
}

/// Proposed mapping for review, one entry per upload column.
#[derive(Debug)]
pub struct MappingReview {
    pub columns: Vec<UploadColumn>,
    pub state: MappingState,
    pub template: Template,
}

impl MappingReview {
    pub fn summary(&self) -> MappingSummary {
        self.state.summary(&self.template)
    }
}

fn load_template(path: &Path) -> Result<Template> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read template: {}", path.display()))?;
    let template = parse_template_str(&raw)
        .with_context(|| format!("parse template: {}", path.display()))?;
    Ok(template)
}

/// Propose a mapping for a sheet without validating it.
pub fn run_map(
    template_path: &Path,
    file_path: &Path,
    header_row_index: usize,
) -> Result<MappingReview> {
    let template = load_template(template_path)?;
    let sheet = read_csv_sheet(file_path)?;
    let columns = build_upload_columns(&sheet, header_row_index)?;
    let state = MappingState::propose(&columns, &template.columns);
    Ok(MappingReview {
        columns,
        state,
        template,
    })
}

/// Run the full pipeline: ingest, auto-map, validate, assemble, write.
pub fn run_import(options: &ImportOptions) -> Result<ImportOutcome> {
    let template = load_template(&options.template_path)?;
    let sheet = read_csv_sheet(&options.file_path)?;
    let columns = build_upload_columns(&sheet, options.header_row_index)?;
    let data_row_count = sheet.data_rows(options.header_row_index).len();

    let session = ImportSession::new(
        template,
        sheet,
        &columns,
        options.header_row_index,
        options.policy,
    )?;

    let errors = session.errors().to_vec();
    let error_row_count = session.error_row_count();
    info!(
        rows = data_row_count,
        errors = errors.len(),
        error_rows = error_row_count,
        "validation complete"
    );

    if options.dry_run {
        return Ok(ImportOutcome {
            errors,
            error_row_count,
            data_row_count,
            written: None,
            blocked: false,
        });
    }

    let rows = match session.submit() {
        Ok(rows) => rows,
        Err(SubmitError::BlockedByErrors { .. }) => {
            return Ok(ImportOutcome {
                errors,
                error_row_count,
                data_row_count,
                written: None,
                blocked: true,
            });
        }
        Err(other) => return Err(other.into()),
    };

    let output = options
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&options.file_path));
    write_csv_rows(&output, &rows)?;

    Ok(ImportOutcome {
        errors,
        error_row_count,
        data_row_count,
        written: Some((output, rows.len())),
        blocked: false,
    })
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "import".to_string(), |s| s.to_string_lossy().into_owned());
    input.with_file_name(format!("{stem}.imported.csv"))
}
