use std::fs;

use sqf_core::config::{Config, Problem, ProblemKind};
use sqf_core::frontmatter::split;
use sqf_core::repository::JournalRepository;

use super::types::{DoctorResult, Issue};
use crate::commands::context::describe_problem;

/// Report every configuration problem; all of them count as errors here.
pub fn check_config(path_exists: bool, problems: &[Problem], result: &mut DoctorResult) {
    if !path_exists {
        result.add_issue(Issue::error(
            "config-missing",
            "configuration file not found; built-in defaults are in use",
        ));
        return;
    }

    let defaults = Config::default();
    for problem in problems {
        let category = match problem.kind {
            ProblemKind::Missing => "config-missing-key",
            ProblemKind::WrongType => "config-wrong-type",
            ProblemKind::Unparseable => "config-unparseable",
            ProblemKind::Unreadable => "config-unreadable",
        };
        result.add_issue(Issue::error(category, describe_problem(problem, &defaults)));
    }
}

/// The journal directory must exist.
pub fn check_journal_dir(config: &Config, result: &mut DoctorResult) {
    if !config.journals_dir.is_dir() {
        result.add_issue(
            Issue::error("journal-missing", "journal directory not found")
                .at(config.journals_dir.display().to_string()),
        );
    }
}

/// Scan documents for front matter that parses but cannot produce an entry.
pub fn check_documents(repo: &JournalRepository, result: &mut DoctorResult) {
    for path in repo.documents() {
        result.documents_scanned += 1;
        let location = path.display().to_string();

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                result.add_issue(Issue::error("unreadable-document", e.to_string()).at(location));
                continue;
            }
        };

        if split(&text).metadata.is_none() {
            result.add_issue(Issue::warning("no-frontmatter", "document has no front matter").at(location));
            continue;
        }

        match repo.parser().read(&text) {
            Err(problem) => {
                result.add_issue(Issue::warning("invalid-frontmatter", problem.to_string()).at(location));
            }
            Ok(metadata) if metadata.created_at().is_none() => {
                result.add_issue(
                    Issue::warning("missing-created-at", "created_at is absent or not a date; excluded from reports")
                        .at(location),
                );
            }
            Ok(_) => {}
        }
    }
}
