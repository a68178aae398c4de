// Integration tests for the advising CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and stdout/stderr output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the advising binary.
fn advising() -> Command {
    Command::cargo_bin("advising").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    advising()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("advising"));
}

#[test]
fn cli_help_flag() {
    advising()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("schedule risk advising"));
}

#[test]
fn assess_requires_student() {
    advising()
        .args(["assess", "--course", "MATH 1203"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn assess_requires_at_least_one_course() {
    advising()
        .args(["assess", "--student", "1001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    advising()
        .args(["-q", "-v", "catalog"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
