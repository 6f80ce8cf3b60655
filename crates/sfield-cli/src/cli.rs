//! CLI argument definitions for the field generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sfield",
    version,
    about = "Generate Salesforce custom field metadata from a CSV definition file",
    long_about = "Generate Salesforce custom field metadata from a CSV definition file.\n\n\
                  Each data line describes one field. Lines with missing required\n\
                  values are reported and skipped; the others are written as\n\
                  <objectName>/<fullname>.field-meta.xml under main/default/objects."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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

    /// Include raw definition cell values in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate field metadata files from a definition CSV.
    Generate(GenerateArgs),

    /// List the supported field types and the columns each one reads.
    Kinds,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// CSV file describing the fields to generate.
    #[arg(short = 'f', long = "definition-file", value_name = "FILE")]
    pub definition_file: PathBuf,

    /// Output directory (default: package directory of the project in the
    /// current folder).
    #[arg(short = 'd', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Package directory path from sfdx-project.json to write into, instead
    /// of the default one.
    #[arg(long = "package", value_name = "PATH", conflicts_with = "output_dir")]
    pub package: Option<String>,

    /// Field delimiter of the definition file.
    #[arg(long = "delimiter", default_value_t = ',')]
    pub delimiter: char,

    /// Print the run result as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
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
