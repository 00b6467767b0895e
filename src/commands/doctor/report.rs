use super::types::{DoctorResult, Severity};
use crate::cli::Cli;

/// Output the doctor result in human-readable form
pub fn output_result(cli: &Cli, result: &DoctorResult) {
    if result.issues.is_empty() {
        if !cli.quiet {
            println!(
                "Journal is healthy ({} documents scanned)",
                result.documents_scanned
            );
        }
        return;
    }

    println!(
        "Found {} issue(s) in {} documents:",
        result.issues.len(),
        result.documents_scanned
    );
    println!();

    for issue in &result.issues {
        let severity_prefix = match issue.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN ",
        };
        println!("  {} [{}] {}", severity_prefix, issue.category, issue.message);
        if let Some(path) = &issue.path {
            println!("         at {}", path);
        }
    }

    println!();
    println!(
        "Summary: {} error(s), {} warning(s)",
        result.error_count, result.warning_count
    );
}
