#![allow(clippy::print_stdout)]

mod args;

use crate::args::{Cli, Command, ExportFormat};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use policy::domain::config::PolicyConfig;
use policy::kernel::config::load_config;
use policy::kernel::export;
use policy::page::behaviors::freshness;
use policy_logger::Logger;
use std::path::PathBuf;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logger = init_logger(&cli)?;

    match cli.command {
        Command::Export { config, format, pretty } => {
            let config = load(config)?;
            print!("{}", render(&config, format, pretty)?);
        },
        Command::Freshness { config, today } => {
            let config = load(config)?;
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            println!("{}", freshness_line(&config, today)?);
        },
    }

    Ok(())
}

fn init_logger(cli: &Cli) -> Result<Logger> {
    let builder = Logger::builder().name(env!("CARGO_PKG_NAME")).console(true).level(cli.log_level);
    let logger = match &cli.log_dir {
        Some(dir) => builder.path(dir).init(),
        None => builder.init(),
    };
    logger.context("Failed to initialize logging")
}

fn load(path: Option<PathBuf>) -> Result<PolicyConfig> {
    let config = load_config(path.as_deref()).context("Failed to load policy config")?;
    tracing::info!(company = %config.company.name, "Policy record ready");
    Ok(config)
}

fn render(config: &PolicyConfig, format: ExportFormat, pretty: bool) -> Result<String> {
    let rendered = match format {
        ExportFormat::Script => export::global_script(config)?,
        ExportFormat::Module => export::module_script(config)?,
        ExportFormat::Json => export::to_json(config, pretty)? + "\n",
    };
    Ok(rendered)
}

fn freshness_line(config: &PolicyConfig, today: NaiveDate) -> Result<String> {
    let last_updated = &config.legal.last_updated;
    let date = freshness::parse_policy_date(last_updated)
        .with_context(|| format!("Unparsable lastUpdated date '{last_updated}'"))?;

    Ok(match freshness::note(freshness::days_since(date, today)) {
        Some(note) => format!("{last_updated} {note}"),
        None => last_updated.clone(),
    })
}
