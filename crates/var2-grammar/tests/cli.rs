//! End-to-end checks of the `var2` verification binary.

#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn var2() -> Command {
    Command::cargo_bin("var2").unwrap()
}

#[test]
fn test_embedded_artifact_passes() {
    var2()
        .assert()
        .success()
        .stdout(predicate::str::contains("var2 grammar ok"))
        .stdout(predicate::str::contains("22 rules"));
}

#[test]
fn test_quiet_suppresses_the_summary() {
    var2().arg("-q").assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn test_external_copy_of_the_artifact_passes() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(var2_grammar::GRAMMAR_JSON.as_bytes()).unwrap();

    var2().arg(file.path()).assert().success();
}

#[test]
fn test_corrupt_artifact_fails_with_the_diagnostic() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{ \"name\": \"var2\" ").unwrap();

    var2()
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error loading Var2 grammar"));
}

#[test]
fn test_foreign_grammar_fails_with_the_diagnostic() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{"name": "other", "rules": {"source": {"type": "BLANK"}}}"#)
        .unwrap();

    var2()
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("expected 'var2'"));
}

#[test]
fn test_missing_file_is_a_usage_error() {
    var2()
        .arg("no/such/artifact.json")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("cannot read"));
}
