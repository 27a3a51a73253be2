//! # CLI Argument Definitions

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use policy_logger::LevelFilter;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "policy-page")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Exports the privacy-policy record and reports its freshness")]
pub(crate) struct Cli {
    /// Log level for the console (and file) output; `RUST_LOG` takes precedence
    #[arg(long, global = true, default_value = "warn")]
    pub(crate) log_level: LevelFilter,

    /// Also write rolling log files into this directory
    #[arg(long, global = true)]
    pub(crate) log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Print the policy record for the page or another consumer
    Export {
        /// Policy file (TOML, JSON, YAML...); defaults to `policy.*` in the working directory
        #[arg(long, short)]
        config: Option<PathBuf>,

        #[arg(long, short, value_enum, default_value_t = ExportFormat::Script)]
        format: ExportFormat,

        /// Pretty-print JSON output (scripts are always pretty)
        #[arg(long)]
        pretty: bool,
    },
    /// Print the last-updated date with its elapsed-days note
    Freshness {
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Reference date (YYYY-MM-DD); defaults to the local date
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ExportFormat {
    /// `window.APP_CONFIG = {...};`
    Script,
    /// `module.exports = {...};`
    Module,
    Json,
}
