//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tabular-chart-studio",
    version,
    about = "Inspect tabular files and validate chart configurations against them",
    long_about = "Inspect tabular files and validate chart configurations against them.\n\n\
                  Reads a CSV file, derives the selectable columns from its header row,\n\
                  and checks a chart type plus column and axis selections against them."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Allow cell values to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Settings file (default: platform config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a file and show its columns, row count and warnings.
    Inspect(InspectArgs),

    /// Check a chart configuration against a file.
    Validate(ValidateArgs),

    /// List supported chart types.
    ChartTypes,
}

/// Parsing overrides shared by file commands.
#[derive(clap::Args)]
pub struct ParseArgs {
    /// Field delimiter (default: detected from the header line).
    #[arg(long = "delimiter", value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Treat the first row as data and name columns by position.
    #[arg(long = "no-header")]
    pub no_header: bool,

    /// Convert numeric-looking cells to numbers.
    #[arg(long = "dynamic-typing")]
    pub dynamic_typing: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// File to parse.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub parse: ParseArgs,

    /// Number of data rows to preview.
    #[arg(long = "rows", value_name = "N", default_value_t = 5)]
    pub rows: usize,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// File to validate against.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub parse: ParseArgs,

    /// Chart type value (bar, line, pie).
    #[arg(long = "chart-type", value_name = "TYPE")]
    pub chart_type: Option<String>,

    /// Columns to chart, comma-separated.
    #[arg(long = "columns", value_name = "NAMES", value_delimiter = ',')]
    pub columns: Vec<String>,

    /// X axis columns, comma-separated.
    #[arg(long = "x-axes", value_name = "NAMES", value_delimiter = ',')]
    pub x_axes: Vec<String>,

    /// Y axis columns, comma-separated.
    #[arg(long = "y-axes", value_name = "NAMES", value_delimiter = ',')]
    pub y_axes: Vec<String>,

    /// Print the result as JSON.
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
