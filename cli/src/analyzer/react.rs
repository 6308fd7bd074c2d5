//! # React Project Analyzer
//!
//! File: cli/src/analyzer/react.rs
//!
//! ## Overview
//!
//! Decides whether a directory holds a React web project and, when it does,
//! describes it: name, dependencies, scripts and the conventional build
//! command and output directory.
//!
//! ## Architecture
//!
//! `analyze` is a linear check over `<project>/package.json`:
//!
//! 1. No manifest: `Absence::ManifestNotFound`
//! 2. Manifest cannot be read: `Absence::Unreadable` with a `Diagnostic`
//! 3. Manifest is not valid JSON: `Absence::Malformed` with a `Diagnostic`
//! 4. Neither `dependencies` nor `devDependencies` has `react`: `Absence::NotReact`
//! 5. Otherwise: `Analysis::Project(ProjectInfo)`
//!
//! Nothing is returned as an error and nothing is logged above `debug`.
//! Read and parse failures travel back as `Diagnostic` values so the caller
//! chooses how loudly to report them.
//!
//! ## Usage
//!
//! ```rust
//! use crate::analyzer;
//!
//! match analyzer::analyze(Path::new("./web")) {
//!     Analysis::Project(info) => println!("build with `{}`", info.build_command),
//!     Analysis::Absent(reason) => println!("skipped: {}", reason),
//! }
//! ```
//!
use super::manifest::ManifestDescriptor;
use crate::core::error::VesselError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the manifest looked up in the project root.
pub const MANIFEST_FILE: &str = "package.json";
/// Package whose presence marks a React project.
pub const REACT_PACKAGE: &str = "react";
/// Build invocation reported for every React project.
pub const BUILD_COMMAND: &str = "npm run build";
/// Build artifact directory reported for every React project.
pub const BUILD_OUTPUT: &str = "build";

/// Description of a detected React project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    pub name: String,
    /// The analyzed path, exactly as given by the caller.
    pub path: PathBuf,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
    pub scripts: BTreeMap<String, String>,
    pub build_command: String,
    pub build_output: String,
}

impl ProjectInfo {
    /// Whether `scripts` declares a `build` entry.
    ///
    /// Informational only: `build_command` and `build_output` are the same
    /// either way.
    pub fn declares_build_script(&self) -> bool {
        self.scripts.contains_key("build")
    }
}

/// An error-level record explaining why a manifest could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub manifest: PathBuf,
    pub message: String,
}

impl Diagnostic {
    fn new(manifest: &Path, err: &VesselError) -> Self {
        Diagnostic {
            manifest: manifest.to_path_buf(),
            message: format!("Error analyzing project: {}", err),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Why no `ProjectInfo` was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Absence {
    ManifestNotFound { manifest: PathBuf },
    Unreadable(Diagnostic),
    Malformed(Diagnostic),
    NotReact { manifest: PathBuf },
}

impl fmt::Display for Absence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Absence::ManifestNotFound { manifest } => {
                write!(f, "no {} found at {}", MANIFEST_FILE, manifest.display())
            }
            Absence::Unreadable(diag) | Absence::Malformed(diag) => write!(f, "{}", diag),
            Absence::NotReact { manifest } => write!(
                f,
                "{} does not depend on '{}'",
                manifest.display(),
                REACT_PACKAGE
            ),
        }
    }
}

/// Outcome of `analyze`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Analysis {
    Project(ProjectInfo),
    Absent(Absence),
}

impl Analysis {
    pub fn project(&self) -> Option<&ProjectInfo> {
        match self {
            Analysis::Project(info) => Some(info),
            Analysis::Absent(_) => None,
        }
    }

    pub fn into_project(self) -> Option<ProjectInfo> {
        match self {
            Analysis::Project(info) => Some(info),
            Analysis::Absent(_) => None,
        }
    }

    /// The diagnostic attached to a read or parse failure, if any.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Analysis::Absent(Absence::Unreadable(diag) | Absence::Malformed(diag)) => Some(diag),
            _ => None,
        }
    }
}

/// Analyzes `project_path` and reports whether it is a React project.
pub fn analyze(project_path: &Path) -> Analysis {
    let manifest_path = project_path.join(MANIFEST_FILE);
    debug!("Looking for manifest at: {}", manifest_path.display());

    if !manifest_path.exists() {
        debug!("No manifest found; not a React project.");
        return Analysis::Absent(Absence::ManifestNotFound {
            manifest: manifest_path,
        });
    }

    let manifest = match ManifestDescriptor::load(&manifest_path) {
        Ok(manifest) => manifest,
        Err(err @ VesselError::ManifestParse { .. }) => {
            debug!("Manifest is malformed: {}", err);
            return Analysis::Absent(Absence::Malformed(Diagnostic::new(&manifest_path, &err)));
        }
        Err(err) => {
            debug!("Manifest is unreadable: {}", err);
            return Analysis::Absent(Absence::Unreadable(Diagnostic::new(&manifest_path, &err)));
        }
    };

    if !manifest.depends_on(REACT_PACKAGE) {
        debug!("Manifest does not list '{}' as a dependency.", REACT_PACKAGE);
        return Analysis::Absent(Absence::NotReact {
            manifest: manifest_path,
        });
    }

    let info = ProjectInfo {
        name: manifest.name_or_default().to_string(),
        path: project_path.to_path_buf(),
        dependencies: manifest.dependencies,
        dev_dependencies: manifest.dev_dependencies,
        scripts: manifest.scripts,
        build_command: BUILD_COMMAND.to_string(),
        build_output: BUILD_OUTPUT.to_string(),
    };
    debug!(
        "Detected React project '{}' (build script declared: {}).",
        info.name,
        info.declares_build_script()
    );
    Analysis::Project(info)
}
