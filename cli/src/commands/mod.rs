//! # Vessel Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the Vessel CLI so the
//! entry point (`main.rs`) can route to them. Each command defines its own
//! arguments structure and handler function.
//!
//! ## Commands
//!
//! - `analyze`: Detect a React project and describe how to build it
//!

/// Runs the project analyzer against a directory and prints the result.
pub mod analyze;
