//! Report command - summarize recent journal entries

use chrono::{Local, NaiveDate};

use sqf_core::entry::Entry;
use sqf_core::error::Result;
use sqf_core::report::{self, ReportFormat};

use super::context::{load_config, open_repository};
use crate::cli::Cli;

#[tracing::instrument(skip(cli))]
pub fn execute(cli: &Cli, since: u32, format: ReportFormat, today: Option<NaiveDate>) -> Result<()> {
    let config = load_config(cli)?;
    let repo = open_repository(&config)?;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let cutoff = report::cutoff(today, since);
    tracing::debug!(%cutoff, "report cutoff");

    let entries = repo.entries(cutoff).collect::<Result<Vec<Entry>>>()?;

    match report::render(&entries, &config.trailer_keys, format) {
        Some(text) => print!("{}", text),
        None => {
            if !cli.quiet {
                println!("No entries found.");
            }
        }
    }

    Ok(())
}
