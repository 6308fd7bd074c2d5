//! # Vessel Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the Vessel application.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `VesselError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The manifest variants never leave the analyzer: it turns them into
//! `Diagnostic` values attached to an absent outcome. The remaining variants
//! surface through command handlers to `main`.
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type through anyhow
//! anyhow::bail!(VesselError::NotReactProject { path: project_path.to_path_buf() });
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the Vessel application.
#[derive(Error, Debug)]
pub enum VesselError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read manifest {}: {source}", .path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest {}: {source}", .path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("'{}' is not a React project.", .path.display())]
    NotReactProject { path: PathBuf },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
