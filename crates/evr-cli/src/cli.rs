//! CLI argument definitions for the event report table tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "evr",
    version,
    about = "Event report table tool - Inspect analytics queries and table output",
    long_about = "Derive analytics query parameters from an event report definition\n\
                  and run the display pipeline over a fetched result table:\n\
                  column hiding, search, per-column filters, sorting, pagination,\n\
                  and CSV export."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Derive analytics query parameters from a report definition.
    Derive(DeriveArgs),

    /// Render a fetched result table through the display pipeline.
    Render(RenderArgs),

    /// Export the projected table as CSV.
    Export(ExportArgs),

    /// List the default hidden columns.
    Columns,
}

#[derive(Parser)]
pub struct DeriveArgs {
    /// Path to the report definition JSON.
    #[arg(value_name = "REPORT_JSON")]
    pub report: PathBuf,

    /// Tracked entity attribute ids known to the program, used to
    /// classify legacy column-dimension tokens.
    #[arg(long = "known-attribute", value_name = "ID")]
    pub known_attributes: Vec<String>,

    /// Fetch page to request.
    #[arg(long = "page")]
    pub page: Option<u32>,

    /// Fetch page size.
    #[arg(long = "page-size")]
    pub page_size: Option<u32>,
}

#[derive(Parser)]
pub struct ViewArgs {
    /// Case-insensitive search over all visible cells.
    #[arg(long = "search", value_name = "TERM")]
    pub search: Option<String>,

    /// Per-column filter as INDEX=VALUE (repeatable).
    #[arg(long = "filter", value_name = "IDX=VALUE")]
    pub filters: Vec<String>,

    /// Sort by this visible column index.
    #[arg(long = "sort-by", value_name = "IDX")]
    pub sort_by: Option<usize>,

    /// Sort descending instead of ascending.
    #[arg(long = "desc", requires = "sort_by")]
    pub desc: bool,

    /// Display page (1-based).
    #[arg(long = "page", default_value_t = 1)]
    pub page: u32,

    /// Rows per display page.
    #[arg(long = "page-size", default_value_t = 10)]
    pub page_size: u32,

    /// Hide a column by header name (repeatable).
    #[arg(long = "hide", value_name = "NAME")]
    pub hide: Vec<String>,

    /// Also hide the default identifier columns.
    #[arg(long = "hide-defaults")]
    pub hide_defaults: bool,

    /// Directory holding per-dashboard configuration files.
    #[arg(long = "config-dir", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Dashboard id whose stored configuration seeds the view.
    #[arg(long = "dashboard", value_name = "ID", requires = "config_dir")]
    pub dashboard: Option<String>,
}

#[derive(Parser)]
pub struct RenderArgs {
    /// Path to the report definition JSON.
    #[arg(value_name = "REPORT_JSON")]
    pub report: PathBuf,

    /// Path to the fetched result table CSV.
    #[arg(value_name = "DATA_CSV")]
    pub data: PathBuf,

    #[command(flatten)]
    pub view: ViewArgs,

    /// Show capture-app links in the action column.
    #[arg(long = "links")]
    pub links: bool,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Path to the report definition JSON.
    #[arg(value_name = "REPORT_JSON")]
    pub report: PathBuf,

    /// Path to the fetched result table CSV.
    #[arg(value_name = "DATA_CSV")]
    pub data: PathBuf,

    #[command(flatten)]
    pub view: ViewArgs,

    /// Write the CSV here instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
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
