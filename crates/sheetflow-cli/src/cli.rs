//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sheetflow",
    version,
    about = "Sheetflow - map and validate spreadsheet imports",
    long_about = "Map uploaded spreadsheet columns onto a template schema,\n\
                  validate every cell against per-field type rules, and\n\
                  assemble a clean final payload."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the proposed column-to-field mapping for a sheet.
    Map(MapArgs),

    /// Validate a sheet against a template and write the final payload.
    Import(ImportArgs),
}

#[derive(Parser)]
pub struct MapArgs {
    /// Path to the template JSON file.
    #[arg(value_name = "TEMPLATE")]
    pub template: PathBuf,

    /// Path to the CSV file to map.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Which sheet row holds the column headers.
    #[arg(long = "header-row", value_name = "N", default_value_t = 0)]
    pub header_row: usize,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Path to the template JSON file.
    #[arg(value_name = "TEMPLATE")]
    pub template: PathBuf,

    /// Path to the CSV file to import.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Which sheet row holds the column headers.
    #[arg(long = "header-row", value_name = "N", default_value_t = 0)]
    pub header_row: usize,

    /// Where to write the assembled payload (default: <FILE>.imported.csv).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Drop rows with validation errors from the payload.
    #[arg(long = "filter-invalid-rows")]
    pub filter_invalid_rows: bool,

    /// Refuse to write any payload while validation errors remain.
    #[arg(long = "fail-on-invalid-rows")]
    pub fail_on_invalid_rows: bool,

    /// Validate and report without writing output.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
