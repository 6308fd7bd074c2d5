//! # Vessel CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`main_tests.rs`, `analyze.rs`).
//! Each `.rs` file in `cli/tests/` is compiled as its own test crate that runs
//! the compiled `vessel` binary.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Returns an `assert_cmd::Command` for the compiled `vessel` binary.
///
/// ## Panics
/// Panics if the `vessel` binary cannot be found via `Command::cargo_bin`.
pub fn vessel_cmd() -> Command {
    Command::cargo_bin("vessel").expect("Failed to find vessel binary for testing")
}

/// Returns a `vessel` command running in `cwd` with `cwd` as its home and
/// config directory, so neither `.vessel.toml` files from the checkout nor
/// the developer's own `config.toml` affect the run.
pub fn vessel_cmd_in(cwd: &Path) -> Command {
    let mut cmd = vessel_cmd();
    cmd.current_dir(cwd)
        .env("HOME", cwd)
        .env("XDG_CONFIG_HOME", cwd.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

/// Creates a temporary project directory containing `package.json` with `manifest`.
pub fn project_with_manifest(manifest: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp project dir");
    fs::write(dir.path().join("package.json"), manifest).expect("Failed to write package.json");
    dir
}
