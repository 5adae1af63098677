//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

/// Default location of the campaign dataset.
pub const DEFAULT_INPUT: &str = "data/Marketing_Design_Dataset.csv";

/// Default directory for rendered charts.
pub const DEFAULT_OUTPUT_DIR: &str = "graphs";

#[derive(Parser)]
#[command(
    name = "mkt",
    version,
    about = "Marketing campaign analytics - descriptive statistics and chart rendering",
    long_about = "Analyze a marketing-campaign CSV dataset.\n\n\
                  Computes numeric summaries, categorical distributions, correlations,\n\
                  and group-wise performance metrics, and renders PNG chart artifacts."
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
    /// Print the full statistics report to stdout.
    Report(ReportArgs),

    /// Render the dashboard and correlation-heatmap PNGs.
    Charts(ChartsArgs),
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Path to the campaign CSV file.
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,
}

#[derive(Parser)]
pub struct ChartsArgs {
    /// Path to the campaign CSV file.
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Directory for the rendered PNG files (created if missing).
    #[arg(long = "output-dir", value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
