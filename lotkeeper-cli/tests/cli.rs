//! Integration tests for the lotkeeper CLI.
//!
//! These tests verify that the CLI binary behaves correctly, including
//! argument parsing, help text, and version output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Test that the binary runs without arguments and displays help/error.
#[test]
fn test_cli_no_arguments() {
    let mut cmd = Command::cargo_bin("lotkeeper").expect("Failed to find lotkeeper binary");

    // With clap subcommands required, no arguments should fail and show usage
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

/// Test that the --version flag displays version information.
#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::cargo_bin("lotkeeper").expect("Failed to find lotkeeper binary");

    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("lotkeeper"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that the --help flag displays help text.
#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::cargo_bin("lotkeeper").expect("Failed to find lotkeeper binary");

    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains(
            "Manage parking lot admissions and reservations",
        ));
}

/// Test that an unknown subcommand fails with an error.
#[test]
fn test_cli_unknown_command() {
    let mut cmd = Command::cargo_bin("lotkeeper").expect("Failed to find lotkeeper binary");

    cmd.arg("valet");

    cmd.assert().failure();
}
