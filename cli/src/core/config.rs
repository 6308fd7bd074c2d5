//! # Vessel Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates Vessel configuration. Configuration
//! only affects how results are presented and which directory is analyzed by
//! default; it never changes what the analyzer reports.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.vessel.toml` in the current directory or an ancestor
//!    (the search stops at the first directory containing `.git`)
//! 2. User-specific `config.toml` in the platform config directory
//! 3. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [output]
//! format = "json"
//!
//! [analyze]
//! default_path = "~/code/storefront"
//! ```
//!
//! ```rust
//! let cfg = config::load_config()?;
//! let format = cfg.output.format();
//! ```
//!
use crate::core::error::{Result, VesselError};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub analyze: AnalyzeConfig,
}

/// Presentation settings for command output.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Format used when `--format` is not given on the command line.
    pub format: Option<OutputFormat>,
}

impl OutputConfig {
    /// The configured format, or `text` when no layer set one.
    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

/// Settings for `vessel analyze`.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AnalyzeConfig {
    /// Directory analyzed when no path argument is given (can use ~). Will be expanded.
    pub default_path: Option<String>,
}

/// How analysis results are rendered on stdout.
#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

const PROJECT_CONFIG_FILENAME: &str = ".vessel.toml";

/// Loads the merged, expanded and validated configuration.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Vessel", "vessel") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.vessel.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    Config {
        output: OutputConfig {
            format: project_cfg.output.format.or(user.output.format),
        },
        analyze: AnalyzeConfig {
            default_path: project_cfg
                .analyze
                .default_path
                .or(user.analyze.default_path),
        },
    }
}

fn expand_config_paths(config: &mut Config) {
    if let Some(default_path) = config.analyze.default_path.as_mut() {
        *default_path = shellexpand::tilde(default_path).into_owned();
        debug!("Expanded default analyze path: {}", default_path);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    if let Some(default_path) = &config.analyze.default_path {
        if default_path.trim().is_empty() {
            return Err(anyhow!(VesselError::Config(
                "analyze.default_path cannot be empty.".to_string()
            )));
        }
        if !Path::new(default_path).is_dir() {
            warn!(
                "Configured default analyze path '{}' is not a directory.",
                default_path
            );
        }
    }
    Ok(())
}
