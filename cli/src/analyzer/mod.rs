//! # Vessel Project Analyzer
//!
//! File: cli/src/analyzer/mod.rs
//!
//! ## Overview
//!
//! Read-only inspection of a project directory. The analyzer never builds,
//! installs or writes anything; it only reports what it finds so other
//! commands can decide what to do with the project.
//!
//! - `manifest`: defensive extraction of `package.json` fields
//! - `react`: the React project check and its result types
//!
pub mod manifest;
pub mod react;

pub use react::{analyze, Analysis, ProjectInfo};
