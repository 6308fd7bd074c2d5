//! # Vessel CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//!
//! ## Overview
//!
//! Verifies the top-level behavior of the `vessel` command-line interface:
//! standard flags like `--version` and `--help`, and unknown subcommands.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_main_help_flag() {
    vessel_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:").and(predicate::str::contains("analyze")));
}

#[test]
fn test_main_version_flag() {
    vessel_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_analyze_help() {
    vessel_cmd()
        .args(["analyze", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--require-react"));
}

#[test]
fn test_unknown_subcommand_fails() {
    vessel_cmd()
        .arg("deploy")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}
