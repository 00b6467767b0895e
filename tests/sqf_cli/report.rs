use crate::support::{sqf, write_config, write_entry, FULL_CONFIG};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Report command tests
// ============================================================================

#[test]
fn test_report_filters_and_formats() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), FULL_CONFIG);
    let journal = dir.path().join("journal_logs");
    write_entry(&journal.join("2024-01-15-recent.md"), "2024-01-15", "bug1");
    write_entry(&journal.join("2023-12-01-old.md"), "2023-12-01", "bug2");

    sqf()
        .current_dir(dir.path())
        .env("SQF_TODAY", "2024-02-01")
        .arg("report")
        .assert()
        .success()
        .stdout("### 2024-01-15 2024-01-15-recent\n- fix: bug1\n\n");

    sqf()
        .current_dir(dir.path())
        .env("SQF_TODAY", "2024-02-01")
        .args(["report", "--since", "100", "--format", "txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bug2"))
        .stdout(predicate::str::contains("2023-12-01 2023-12-01-old\nfix: bug2\n"))
        .stdout(predicate::str::contains("###").not());
}

#[test]
fn test_report_uses_title_and_trailer_order() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), FULL_CONFIG);
    let journal = dir.path().join("journal_logs");
    fs::create_dir_all(&journal).unwrap();
    fs::write(
        journal.join("note.md"),
        "---\ncreated_at: 2024-01-20\ntitle: Flaky login\ntrailers:\n  proof: green run\n  fix: retry\n---\nbody\n",
    )
    .unwrap();

    sqf()
        .current_dir(dir.path())
        .args(["report", "--today", "2024-01-31"])
        .assert()
        .success()
        .stdout("### 2024-01-20 Flaky login\n- fix: retry\n- proof: green run\n\n");
}

#[test]
fn test_report_skips_non_utf8_document() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), FULL_CONFIG);
    let journal = dir.path().join("journal_logs");
    write_entry(&journal.join("a-good.md"), "2024-01-15", "bug1");
    fs::write(
        journal.join("b-bad.md"),
        b"---\ncreated_at: 2024-01-16\ntitle: caf\xe9\n---\n",
    )
    .unwrap();

    sqf()
        .current_dir(dir.path())
        .env("SQF_TODAY", "2024-02-01")
        .arg("report")
        .assert()
        .success()
        .stdout("### 2024-01-15 a-good\n- fix: bug1\n\n");
}

#[test]
fn test_report_missing_journal_dir() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), FULL_CONFIG);

    sqf()
        .current_dir(dir.path())
        .arg("report")
        .assert()
        .success()
        .stdout("No entries found.\n");
}

#[test]
fn test_report_empty_journal_dir() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), FULL_CONFIG);
    fs::create_dir(dir.path().join("journal_logs")).unwrap();

    sqf()
        .current_dir(dir.path())
        .arg("report")
        .assert()
        .success()
        .stdout("No entries found.\n");
}

#[test]
fn test_report_skips_malformed_documents() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), FULL_CONFIG);
    let journal = dir.path().join("journal_logs");
    write_entry(&journal.join("good.md"), "2024-01-15", "ok");
    fs::write(journal.join("broken.md"), "---\ntrailers: [oops\n---\n").unwrap();

    sqf()
        .current_dir(dir.path())
        .env("SQF_TODAY", "2024-02-01")
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("- fix: ok"))
        .stdout(predicate::str::contains("broken").not());
}

#[test]
fn test_report_quiet_suppresses_empty_message() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), FULL_CONFIG);

    sqf()
        .current_dir(dir.path())
        .args(["--quiet", "report"])
        .assert()
        .success()
        .stdout("");
}
