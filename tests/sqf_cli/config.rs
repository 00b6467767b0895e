use crate::support::{sqf, write_config, FULL_CONFIG};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Configuration handling across commands
// ============================================================================

#[test]
fn test_valid_config_allows_run() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), FULL_CONFIG);

    sqf()
        .current_dir(dir.path())
        .arg("report")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_absent_config_uses_defaults() {
    let dir = tempdir().unwrap();

    sqf()
        .current_dir(dir.path())
        .arg("report")
        .assert()
        .success()
        .stdout("No entries found.\n");
}

#[test]
fn test_missing_key_is_warning() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "journals_dir: logs\n");

    sqf()
        .current_dir(dir.path())
        .arg("report")
        .assert()
        .success()
        .stderr(predicate::str::contains("missing 'trailer_keys'"))
        .stderr(predicate::str::contains("trailer_keys: [fix, why, change, proof, ref]"));
}

#[test]
fn test_malformed_key_shows_example() {
    let dir = tempdir().unwrap();
    write_config(
        dir.path(),
        &FULL_CONFIG.replace("trailer_keys: [fix, why, change, proof, ref]", "trailer_keys: bad"),
    );

    sqf()
        .current_dir(dir.path())
        .arg("report")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("'trailer_keys' should be a list of strings"))
        .stderr(predicate::str::contains("trailer_keys: [fix, why, change, proof, ref]"));
}

#[test]
fn test_trailer_keys_elements_must_be_strings() {
    let dir = tempdir().unwrap();
    write_config(
        dir.path(),
        &FULL_CONFIG.replace("trailer_keys: [fix, why, change, proof, ref]", "trailer_keys: [fix, 1]"),
    );

    sqf()
        .current_dir(dir.path())
        .args(["preview", "--format", "trailers"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("trailer_keys"));
}

#[test]
fn test_malformed_yaml_shows_error() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "journals_dir: [\n");

    sqf()
        .current_dir(dir.path())
        .arg("report")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn test_unreadable_config_shows_error() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join(".squirrelfocus/config.yaml")).unwrap();

    sqf()
        .current_dir(dir.path())
        .arg("report")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Could not read config"));
}

#[test]
fn test_config_flag_overrides_location() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("alt.yaml"),
        FULL_CONFIG.replace("journals_dir: journal_logs", "journals_dir: notes"),
    )
    .unwrap();
    let notes = dir.path().join("notes");
    fs::create_dir(&notes).unwrap();
    fs::write(notes.join("a.md"), "---\ntrailers:\n  fix: alt\n---\n").unwrap();

    sqf()
        .current_dir(dir.path())
        .args(["--config", "alt.yaml", "preview", "--format", "trailers"])
        .assert()
        .success()
        .stdout("fix: alt\n");
}
