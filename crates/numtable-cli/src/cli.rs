//! CLI argument definitions for the number-table explorer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use numtable_model::Operation;

#[derive(Parser)]
#[command(
    name = "numtable",
    version,
    about = "NumTable - Explore number tables and properties",
    long_about = "Explore and visualize the properties of numbers.\n\n\
                  Generates multiplication, division, addition, and subtraction\n\
                  tables for any positive integer, along with derived properties:\n\
                  parity, primality, digit sum, factors, and prime factorization."
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
    /// Generate a table for a number.
    Table(TableArgs),

    /// Show the derived properties of a number.
    Properties(PropertiesArgs),

    /// List the supported table operations.
    Operations,

    /// Start the interactive explorer.
    Repl,
}

#[derive(Parser)]
pub struct TableArgs {
    /// The base number (a positive integer).
    #[arg(value_name = "NUMBER")]
    pub number: String,

    /// Table operation to generate.
    #[arg(long = "op", value_enum, default_value = "multiplication")]
    pub op: OperationArg,

    /// First loop index (inclusive).
    #[arg(long = "start", value_name = "N", default_value_t = 1, allow_hyphen_values = true)]
    pub start: i64,

    /// Last loop index (inclusive). A value below --start yields an empty table.
    #[arg(long = "end", value_name = "N", default_value_t = 12, allow_hyphen_values = true)]
    pub end: i64,

    /// Also print the properties panel.
    #[arg(long = "properties")]
    pub properties: bool,

    /// Emit the evaluation as JSON instead of formatted tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct PropertiesArgs {
    /// The base number (a positive integer).
    #[arg(value_name = "NUMBER")]
    pub number: String,

    /// Emit the properties as JSON instead of a formatted panel.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI operation choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum OperationArg {
    Multiplication,
    Division,
    Addition,
    Subtraction,
}

impl From<OperationArg> for Operation {
    fn from(arg: OperationArg) -> Self {
        match arg {
            OperationArg::Multiplication => Operation::Multiplication,
            OperationArg::Division => Operation::Division,
            OperationArg::Addition => Operation::Addition,
            OperationArg::Subtraction => Operation::Subtraction,
        }
    }
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
