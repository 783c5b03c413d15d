//! CLI argument definitions for the OCDS CSV tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use ocds_model::ReleaseType;

#[derive(Parser)]
#[command(
    name = "ocds-csv",
    version,
    about = "OCDS CSV mapper - Convert procurement spreadsheets to release-path CSVs",
    long_about = "Convert procurement disclosure spreadsheets between three shapes:\n\
                  raw Contracts Finder daily exports, simplified friendly-column\n\
                  templates, and fully-qualified OCDS release-path CSVs."
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

    /// Use mapping and schema data from this directory instead of the
    /// built-in data root (or the OCDS_DATA_DIR environment variable).
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a simple CSV submission to a release-path CSV.
    Convert(ConvertArgs),

    /// Convert a Contracts Finder daily export to a release-path CSV.
    Export(ExportArgs),

    /// Write the simple CSV templates (tender, award, spend).
    Templates(TemplatesArgs),

    /// List the mapping table.
    Mappings(MappingsArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Path to the simple CSV submission.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Release type of the submission; detected from the columns when
    /// omitted. Spend files must always declare it.
    #[arg(long = "release-type", value_enum)]
    pub release_type: Option<ReleaseTypeArg>,

    /// Output path (default: input name with a _release suffix).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Exit nonzero when any cell-level warning was collected.
    #[arg(long = "deny-warnings")]
    pub deny_warnings: bool,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Path to the Contracts Finder daily export.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output path (default: input name with a _release suffix).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Release type of the export; detected from the columns when
    /// omitted.
    #[arg(long = "release-type", value_enum)]
    pub release_type: Option<ReleaseTypeArg>,

    /// Also write the simplified friendly-column view next to the
    /// release-path output.
    #[arg(long = "simple")]
    pub simple: bool,

    /// Exit nonzero when any cell-level warning was collected.
    #[arg(long = "deny-warnings")]
    pub deny_warnings: bool,
}

#[derive(Parser)]
pub struct TemplatesArgs {
    /// Directory to write the three template files into.
    #[arg(value_name = "DIR")]
    pub output_dir: PathBuf,
}

#[derive(Parser)]
pub struct MappingsArgs {
    /// Only show entries applicable to this release type.
    #[arg(long = "release-type", value_enum)]
    pub release_type: Option<ReleaseTypeArg>,
}

/// CLI release type choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ReleaseTypeArg {
    Tender,
    Award,
    Spend,
}

impl From<ReleaseTypeArg> for ReleaseType {
    fn from(arg: ReleaseTypeArg) -> Self {
        match arg {
            ReleaseTypeArg::Tender => Self::Tender,
            ReleaseTypeArg::Award => Self::Award,
            ReleaseTypeArg::Spend => Self::Spend,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
