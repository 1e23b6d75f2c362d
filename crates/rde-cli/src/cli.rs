//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rde-template",
    version,
    about = "Generate RDE dataset template JSON files from requirement-definition workbooks",
    long_about = "Generate RDE dataset template JSON files from requirement-definition workbooks.\n\n\
                  For each workbook, five artifacts are produced into a folder named after\n\
                  the workbook: metadata-def.json, invoice.schema.json, invoice.json,\n\
                  catalog.schema.json, and catalog.json. Workbooks missing a requirement\n\
                  sheet simply skip the dependent artifacts."
)]
pub struct Cli {
    /// Workbook files to process. With no arguments, every .xlsx file in the
    /// working directory is processed.
    #[arg(value_name = "WORKBOOK")]
    pub inputs: Vec<PathBuf>,

    /// Wait for Enter before exiting.
    #[arg(long = "pause")]
    pub pause: bool,

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
