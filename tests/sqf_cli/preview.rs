use crate::support::{set_mtime, sqf, write_config, FULL_CONFIG};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const ENTRY: &str = "---\ntrailers:\n  fix: bug\n  why: x\n  change: y\n  proof: z\n---\n";

// ============================================================================
// Preview command tests
// ============================================================================

#[test]
fn test_preview_outputs_summary() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), FULL_CONFIG);
    let journal = dir.path().join("journal_logs");
    fs::create_dir(&journal).unwrap();
    fs::write(journal.join("2024-01-01-test.md"), ENTRY).unwrap();

    sqf()
        .current_dir(dir.path())
        .arg("preview")
        .assert()
        .success()
        .stdout("### CI Triage\n- **Fix:** bug\n- **Why:** x\n- **Change:** y\n- **Proof:** z\n");
}

#[test]
fn test_preview_outputs_trailers() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), FULL_CONFIG);
    let journal = dir.path().join("journal_logs");
    fs::create_dir(&journal).unwrap();
    fs::write(journal.join("2024-01-01-test.md"), ENTRY).unwrap();

    sqf()
        .current_dir(dir.path())
        .args(["preview", "--format", "trailers"])
        .assert()
        .success()
        .stdout("fix: bug\nwhy: x\nchange: y\nproof: z\n");
}

#[test]
fn test_preview_uses_newest_document() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), FULL_CONFIG);
    let journal = dir.path().join("journal_logs");
    fs::create_dir(&journal).unwrap();
    let old = journal.join("2024-01-01-old.md");
    let new = journal.join("2024-01-02-new.md");
    fs::write(&old, "---\ntrailers:\n  fix: old\n---\n").unwrap();
    fs::write(&new, "---\ntrailers:\n  fix: new\n---\n").unwrap();
    set_mtime(&old, 2);
    set_mtime(&new, 1);

    sqf()
        .current_dir(dir.path())
        .args(["preview", "--format", "trailers"])
        .assert()
        .success()
        .stdout("fix: old\n");
}

#[test]
fn test_preview_without_documents_prints_nothing() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), FULL_CONFIG);

    sqf()
        .current_dir(dir.path())
        .args(["preview", "--format", "trailers"])
        .assert()
        .success()
        .stdout("");

    sqf()
        .current_dir(dir.path())
        .arg("preview")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_preview_template_file() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), FULL_CONFIG);
    let journal = dir.path().join("journal_logs");
    fs::create_dir(&journal).unwrap();
    fs::write(journal.join("entry.md"), ENTRY).unwrap();
    fs::write(dir.path().join("summary.tmpl"), "Fixed {{fix}} because {{why}} ({{owner}})").unwrap();

    sqf()
        .current_dir(dir.path())
        .args(["preview", "--template", "summary.tmpl"])
        .assert()
        .success()
        .stdout("Fixed bug because x ({{owner}})\n");
}

#[test]
fn test_preview_missing_template_fails() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), FULL_CONFIG);

    sqf()
        .current_dir(dir.path())
        .args(["preview", "--template", "absent.tmpl"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read template"));
}
