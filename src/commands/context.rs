//! Shared setup for commands: configuration and repository access

use sqf_core::config::{self, Config, Problem};
use sqf_core::error::{Result, SqfError};
use sqf_core::frontmatter::MetadataParser;
use sqf_core::repository::JournalRepository;

use crate::cli::Cli;

/// Problem message with the default value as an example, when one applies
pub fn describe_problem(problem: &Problem, defaults: &Config) -> String {
    match problem
        .key
        .as_deref()
        .and_then(|key| defaults.example_line(key))
    {
        Some(example) => format!("{} (example: {})", problem, example),
        None => problem.to_string(),
    }
}

/// Load configuration, warning about missing keys and failing on the rest.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let (config, problems) = config::load(&cli.config);
    let defaults = Config::default();

    let (fatal, missing): (Vec<Problem>, Vec<Problem>) =
        problems.into_iter().partition(Problem::is_fatal);

    for problem in &missing {
        tracing::warn!(path = %cli.config.display(), "{}", describe_problem(problem, &defaults));
    }

    if !fatal.is_empty() {
        let reason = fatal
            .iter()
            .map(|p| describe_problem(p, &defaults))
            .collect::<Vec<_>>()
            .join("; ");
        return Err(SqfError::InvalidConfig { reason });
    }

    Ok(config)
}

/// Open the journal repository with the parser this build supports.
pub fn open_repository(config: &Config) -> Result<JournalRepository> {
    let parser = MetadataParser::detect();
    tracing::debug!(?parser, journals_dir = %config.journals_dir.display(), "open_repository");
    JournalRepository::from_config(config, parser)
}
