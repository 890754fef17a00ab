//! Command-line tests for the tag-solver binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn tag_solver() -> Command {
    Command::cargo_bin("tag-solver").expect("binary should build")
}

#[test]
fn test_validate_reference_tags() {
    tag_solver()
        .args([
            "validate",
            "--system",
            "reference",
            "ZZZZZZ 10-10-10 NNN",
            "ZZZZZZ 101010 NNN",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("ZZZZZZ 10-10-10 NNN  valid"))
        .stdout(predicate::str::contains("ZZZZZZ 101010 NNN    invalid"));
}

#[test]
fn test_validate_only_valid_from_stdin() {
    tag_solver()
        .args(["validate", "--system", "compact", "--only-valid", "-"])
        .write_stdin("10ABC2\nABC2\n\n10\n10AB2\n")
        .assert()
        .success()
        .stdout("10ABC2\n10\n");
}

#[test]
fn test_validate_explain() {
    tag_solver()
        .args([
            "validate",
            "--system",
            "reference",
            "--explain",
            "ZZZZZZ 10-AB-05 NNN",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("unit_ab"))
        .stdout(predicate::str::contains("(separator)"));
}

#[test]
fn test_validate_json_output() {
    let output = tag_solver()
        .args(["--format", "json", "validate", "--system", "compact", "10", "ABC2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["system"], "compact");
    assert_eq!(json["results"][0]["tag"], "10");
    assert_eq!(json["results"][0]["valid"], true);
    assert_eq!(json["results"][1]["valid"], false);
}

#[test]
fn test_validate_unknown_system() {
    tag_solver()
        .args(["validate", "--system", "nope", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("System 'nope' not found"));
}

#[test]
fn test_validate_step_limit_is_an_error() {
    tag_solver()
        .args(["validate", "--system", "reference", "--max-steps", "1", "ZZZZZZ 10-10-10 NNN"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeded 1 steps"));
}

#[test]
fn test_examples_are_valid() {
    let output = tag_solver()
        .args(["examples", "--system", "reference", "-n", "5"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let examples: Vec<&str> = stdout.lines().collect();
    assert!(!examples.is_empty());
    assert!(examples.len() <= 5);
    assert_eq!(examples[0], "ZZZZZZ 00-00-00 NNN");
}

#[test]
fn test_catalog_list_and_show() {
    tag_solver()
        .args(["catalog", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reference"))
        .stdout(predicate::str::contains("compact"));

    tag_solver()
        .args(["catalog", "show", "compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Layout:      NN[ABC][S]"));
}

#[test]
fn test_custom_catalog_rejects_invalid_system() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "version": "1.0.0",
            "created_at": "2024-01-01T00:00:00Z",
            "systems": [{{
                "id": "bad",
                "name": "Bad",
                "conventions": [{{
                    "id": "a", "name": "A", "keyword": "A", "start": 0, "end": 2,
                    "definitions": [{{"id": "r", "type": "range", "min": 9, "max": 1}}]
                }}]
            }}]
        }}"#
    )
    .unwrap();

    tag_solver()
        .args(["validate", "--system", "bad", "--catalog"])
        .arg(file.path())
        .arg("5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("min 9 > max 1"));
}

#[test]
fn test_catalog_export_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exported.json");

    tag_solver()
        .args(["catalog", "export"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 systems"));

    tag_solver()
        .args(["validate", "--system", "compact", "--catalog"])
        .arg(&path)
        .arg("10ABC2")
        .assert()
        .success()
        .stdout(predicate::str::contains("10ABC2  valid"));
}
