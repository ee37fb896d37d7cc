use std::fs;
use std::path::PathBuf;

use sheetflow_cli::pipeline::{ImportOptions, run_import, run_map};
use sheetflow_submit::SubmitPolicy;

const TEMPLATE: &str = r#"{
  "columns": [
    {"name": "First Name", "required": true},
    {"name": "Age", "type": "number"},
    {"name": "Email", "type": "email"}
  ]
}"#;

const SHEET: &str = "\
First Name,Age,Email
Ada,36,ada@example.com
Grace,not a number,grace@example.com
,51,tony@example.com
";

struct Fixture {
    _dir: tempfile::TempDir,
    template: PathBuf,
    file: PathBuf,
    output: PathBuf,
}

fn fixture() -> Fixture {
    let dir = tempfile::tempdir().expect("temp dir");
    let template = dir.path().join("template.json");
    let file = dir.path().join("people.csv");
    let output = dir.path().join("out.csv");
    fs::write(&template, TEMPLATE).expect("write template");
    fs::write(&file, SHEET).expect("write sheet");
    Fixture {
        _dir: dir,
        template,
        file,
        output,
    }
}

fn options(fixture: &Fixture, policy: SubmitPolicy, dry_run: bool) -> ImportOptions {
    ImportOptions {
        template_path: fixture.template.clone(),
        file_path: fixture.file.clone(),
        header_row_index: 0,
        policy,
        output: Some(fixture.output.clone()),
        dry_run,
    }
}

#[test]
fn map_proposes_exact_header_matches() {
    let fixture = fixture();
    let review = run_map(&fixture.template, &fixture.file, 0).expect("map");

    assert_eq!(review.columns.len(), 3);
    let choice = review.state.choice(0).expect("choice");
    assert_eq!(choice.template_key, "first_name");
    assert!(choice.included);
    assert_eq!(review.state.choice(2).expect("choice").template_key, "email");

    let summary = review.summary();
    assert_eq!(summary.mapped, 3);
    assert_eq!(summary.required_mapped, 1);
}

#[test]
fn dry_run_reports_errors_without_writing() {
    let fixture = fixture();
    let outcome = run_import(&options(&fixture, SubmitPolicy::default(), true)).expect("import");

    assert_eq!(outcome.errors.len(), 2);
    assert_eq!(outcome.error_row_count, 2);
    assert_eq!(outcome.data_row_count, 3);
    assert!(outcome.written.is_none());
    assert!(!fixture.output.exists());
}

#[test]
fn filtering_writes_only_clean_rows() {
    let fixture = fixture();
    let policy = SubmitPolicy {
        filter_invalid_rows: true,
        disable_on_invalid_rows: false,
    };
    let outcome = run_import(&options(&fixture, policy, false)).expect("import");

    // Header plus data rows minus distinct error rows.
    let (path, rows) = outcome.written.expect("written");
    assert_eq!(rows, 1 + 3 - 2);
    let contents = fs::read_to_string(path).expect("read output");
    assert!(contents.contains("Ada"));
    assert!(!contents.contains("Grace"));
}

#[test]
fn fail_on_invalid_rows_blocks_the_write() {
    let fixture = fixture();
    let policy = SubmitPolicy {
        filter_invalid_rows: false,
        disable_on_invalid_rows: true,
    };
    let outcome = run_import(&options(&fixture, policy, false)).expect("import");

    assert!(outcome.blocked);
    assert!(outcome.written.is_none());
    assert!(!fixture.output.exists());
}

#[test]
fn clean_sheets_import_in_full() {
    let fixture = fixture();
    fs::write(
        &fixture.file,
        "First Name,Age,Email\nAda,36,ada@example.com\n",
    )
    .expect("write sheet");

    let policy = SubmitPolicy {
        filter_invalid_rows: false,
        disable_on_invalid_rows: true,
    };
    let outcome = run_import(&options(&fixture, policy, false)).expect("import");

    assert!(outcome.errors.is_empty());
    let (_, rows) = outcome.written.expect("written");
    assert_eq!(rows, 2);
}
