//! CLI argument parsing for sqf
//!
//! Supports global flags: --config, --quiet, --verbose, --log-level, --log-json

pub mod output;
pub mod parse;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use sqf_core::config::DEFAULT_CONFIG_PATH;
pub use output::{PreviewFormat, ReportFormatArg};
use parse::parse_date;

/// sqf - journal notes, reports and CI triage summaries
#[derive(Parser, Debug)]
#[command(name = "sqf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. debug, sqf_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize journal entries from the last N days
    Report {
        /// Number of days to look back
        #[arg(long, default_value_t = 30, allow_negative_numbers = true)]
        since: u32,

        /// Output format
        #[arg(long, value_enum, default_value = "md")]
        format: ReportFormatArg,

        /// Date to count back from (defaults to today)
        #[arg(long, env = "SQF_TODAY", hide = true, value_parser = parse_date)]
        today: Option<NaiveDate>,
    },

    /// Render the CI summary or commit trailers of the newest entry
    Preview {
        /// What to render
        #[arg(long, value_enum, default_value = "summary")]
        format: PreviewFormat,

        /// Summary template file (overrides summary_format)
        #[arg(long)]
        template: Option<PathBuf>,
    },

    /// Check configuration and journal health
    Doctor,
}
