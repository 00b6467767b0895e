use crate::support::{sqf, write_config, write_entry, FULL_CONFIG};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Doctor command tests
// ============================================================================

#[test]
fn test_doctor_missing_config() {
    let dir = tempdir().unwrap();

    sqf()
        .current_dir(dir.path())
        .arg("doctor")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[config-missing]"));
}

#[test]
fn test_doctor_ok() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), FULL_CONFIG);
    write_entry(
        &dir.path().join("journal_logs/2024-01-01.md"),
        "2024-01-01",
        "bug",
    );

    sqf()
        .current_dir(dir.path())
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("Journal is healthy (1 documents scanned)"));
}

#[test]
fn test_doctor_reports_missing_key_with_example() {
    let dir = tempdir().unwrap();
    write_config(
        dir.path(),
        &FULL_CONFIG.replace("journals_dir: journal_logs\n", ""),
    );
    fs::create_dir(dir.path().join("journal_logs")).unwrap();

    sqf()
        .current_dir(dir.path())
        .arg("doctor")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[config-missing-key] missing 'journals_dir'"))
        .stdout(predicate::str::contains("journals_dir: journal_logs"));
}

#[test]
fn test_doctor_missing_journal_dir() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), FULL_CONFIG);

    sqf()
        .current_dir(dir.path())
        .arg("doctor")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[journal-missing]"));
}

#[test]
fn test_doctor_warns_about_skipped_documents() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), FULL_CONFIG);
    let journal = dir.path().join("journal_logs");
    fs::create_dir(&journal).unwrap();
    fs::write(journal.join("broken.md"), "---\ntrailers: [oops\n---\n").unwrap();
    fs::write(journal.join("undated.md"), "---\ntitle: x\n---\n").unwrap();
    fs::write(journal.join("plain.md"), "just text\n").unwrap();

    sqf()
        .current_dir(dir.path())
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("[invalid-frontmatter]"))
        .stdout(predicate::str::contains("[missing-created-at]"))
        .stdout(predicate::str::contains("[no-frontmatter]"))
        .stdout(predicate::str::contains("Summary: 0 error(s), 3 warning(s)"));
}
