//! # Vessel Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure shared by the analyzer and
//! the command handlers:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and the application `Result` alias
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{Result, VesselError}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
