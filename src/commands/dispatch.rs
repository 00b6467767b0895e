//! Command dispatch logic for sqf

use std::time::Instant;

use sqf_core::error::Result;
use sqf_core::trace_time;

use crate::cli::{Cli, Commands};

use super::{doctor, preview, report};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let result = match &cli.command {
        Commands::Report {
            since,
            format,
            today,
        } => report::execute(cli, *since, (*format).into(), *today),
        Commands::Preview { format, template } => {
            preview::execute(cli, *format, template.as_deref())
        }
        Commands::Doctor => doctor::execute(cli),
    };

    trace_time!(start, "command");
    result
}
