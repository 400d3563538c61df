//! CLI argument definitions for the table viewer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tabview",
    version,
    about = "Table viewer - filter, sort, paginate, and export JSON record sets",
    long_about = "Render JSON record sets as terminal tables.\n\n\
                  Supports typed column formatting (dates, currency, booleans, status\n\
                  labels), substring filtering, stable sorting, pagination, and CSV export."
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
    /// Render a page of the record set as a terminal table.
    View(ViewArgs),

    /// Write the filtered/sorted record set to a CSV file.
    Export(ExportArgs),

    /// Print the resolved column schema.
    Columns(ColumnsArgs),
}

#[derive(Parser)]
pub struct ViewArgs {
    /// Path to the JSON record array.
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Table configuration file (JSON). Derived from the data when omitted.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Keep only records whose fields contain this text (case-insensitive).
    #[arg(long = "query", value_name = "TEXT")]
    pub query: Option<String>,

    /// Sort by this column key.
    #[arg(long = "sort", value_name = "KEY")]
    pub sort: Option<String>,

    /// Sort direction.
    #[arg(long = "direction", value_enum, default_value = "asc")]
    pub direction: DirectionArg,

    /// Page to display.
    #[arg(long = "page", value_name = "N")]
    pub page: Option<usize>,

    /// Records per page (overrides the configured page size).
    #[arg(long = "page-size", value_name = "N")]
    pub page_size: Option<usize>,

    /// Show every filtered record on one page.
    #[arg(long = "no-pagination")]
    pub no_pagination: bool,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Path to the JSON record array.
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Table configuration file (JSON). Derived from the data when omitted.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Keep only records whose fields contain this text (case-insensitive).
    #[arg(long = "query", value_name = "TEXT")]
    pub query: Option<String>,

    /// Sort by this column key.
    #[arg(long = "sort", value_name = "KEY")]
    pub sort: Option<String>,

    /// Sort direction.
    #[arg(long = "direction", value_enum, default_value = "asc")]
    pub direction: DirectionArg,

    /// Output path (default: derived from the table title and date).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// Path to the JSON record array.
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Table configuration file (JSON). Derived from the data when omitted.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// CLI sort direction choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum DirectionArg {
    Asc,
    Desc,
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
