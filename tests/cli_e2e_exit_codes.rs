//! End-to-end tests for CLI exit codes.
//!
//! - Exit code 0: Success
//! - Exit code 1: Any failure reported by a command
//! - Exit code 2: Invalid command-line usage (handled by clap)

mod common;
use common::prelude::*;

/// Exit code 0 is returned for successful operations.
#[test]
fn test_exit_code_success() {
    TestFixture::new()
        .with_role("web", roles::ONE_TASK)
        .command()
        .arg("stats")
        .assert()
        .code(0);
}

/// An empty scan root is not an error.
#[test]
fn test_exit_code_no_roles() {
    TestFixture::new()
        .command()
        .arg("depends")
        .assert()
        .code(0);
}

/// Exit code 0 is returned for --help.
#[test]
fn test_exit_code_help() {
    cargo_bin_cmd!("ansiqa").arg("--help").assert().code(0);
}

/// Exit code 0 is returned for --version.
#[test]
fn test_exit_code_version() {
    cargo_bin_cmd!("ansiqa")
        .arg("--version")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("ansiqa"));
}

/// Exit code 1 is returned when a command fails.
#[test]
fn test_exit_code_command_failure() {
    TestFixture::new()
        .with_role("web", roles::ONE_TASK)
        .command()
        .arg("meta")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"));
}

/// Exit code 2 is returned for an unknown subcommand.
#[test]
fn test_exit_code_unknown_subcommand() {
    cargo_bin_cmd!("ansiqa").arg("lint").assert().code(2);
}

/// Exit code 2 is returned when no subcommand is given.
#[test]
fn test_exit_code_missing_subcommand() {
    cargo_bin_cmd!("ansiqa").assert().code(2);
}

/// Warnings go to stderr without changing the exit code.
#[test]
fn test_unknown_role_name_warns() {
    TestFixture::new()
        .with_role("web", roles::ONE_TASK)
        .command()
        .args(["stats", "-r", "nope"])
        .assert()
        .code(0)
        .stderr(predicate::str::contains("nope"));
}

/// The log level flag silences warnings.
#[test]
fn test_log_level_error_hides_warnings() {
    TestFixture::new()
        .with_role("web", roles::ONE_TASK)
        .command()
        .args(["--log-level", "error", "stats", "-r", "nope"])
        .assert()
        .code(0)
        .stderr(predicate::str::is_empty());
}
