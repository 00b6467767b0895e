//! Doctor command - validate configuration and journal documents
//!
//! - Reports a missing configuration file and every configuration problem
//! - Reports a missing journal directory
//! - Warns about documents that reports will silently skip

pub mod checks;
pub mod report;
pub mod types;

use sqf_core::config;
use sqf_core::error::{Result, SqfError};
use sqf_core::frontmatter::MetadataParser;
use sqf_core::repository::JournalRepository;

use crate::cli::Cli;
use types::{DoctorResult, Issue};

/// Run every check against the configured journal
#[tracing::instrument(skip(cli), fields(config = %cli.config.display()))]
pub fn run_checks(cli: &Cli) -> DoctorResult {
    let mut result = DoctorResult::new();

    let (config, problems) = config::load(&cli.config);
    checks::check_config(cli.config.exists(), &problems, &mut result);
    checks::check_journal_dir(&config, &mut result);

    match JournalRepository::from_config(&config, MetadataParser::detect()) {
        Ok(repo) => checks::check_documents(&repo, &mut result),
        Err(e) => result.add_issue(Issue::error("config-invalid-glob", e.to_string())),
    }

    result
}

/// Execute the doctor command; fails when any error-level issue is found.
pub fn execute(cli: &Cli) -> Result<()> {
    let result = run_checks(cli);
    report::output_result(cli, &result);

    if result.has_errors() {
        return Err(SqfError::Other(format!(
            "doctor found {} error(s)",
            result.error_count
        )));
    }
    Ok(())
}
