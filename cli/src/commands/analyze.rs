//! # Vessel Analyze Command
//!
//! File: cli/src/commands/analyze.rs
//!
//! ## Overview
//!
//! This module implements `vessel analyze`, which runs the React project
//! analyzer against a directory and prints what it found. It handles:
//! - Resolving the directory (argument, configured default, or `.`)
//! - Reporting manifest read/parse diagnostics through `tracing`
//! - Rendering the result as a boxed text summary or as JSON
//!
//! ## Examples
//!
//! ```bash
//! vessel analyze ./storefront
//! vessel analyze --format json ./storefront
//! vessel analyze --require-react   # fails when the directory is not a React project
//! ```
//!
//! Example output:
//!
//! ```
//! ┏━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┓
//! ┃ ⚛️  React Project: storefront
//! ┣━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┫
//! ┃ 📂 Path:          ./storefront
//! ┃ 🛠️  Build Command: npm run build
//! ┃ 📦 Build Output:  build
//! ┃ 📜 Build Script:  declared
//! ...
//! ```
//!
use crate::analyzer::{self, Analysis, ProjectInfo};
use crate::core::config::{self, OutputFormat};
use crate::core::error::{Result, VesselError};
use anyhow::Context;
use clap::Parser;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{error, info};

const RULE_HEAVY: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// # Analyze Arguments (`AnalyzeArgs`)
///
/// Command-line arguments accepted by `vessel analyze`.
#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Project directory to analyze. Defaults to `analyze.default_path` from
    /// configuration, or the current directory.
    path: Option<PathBuf>,

    /// Output format. Defaults to `output.format` from configuration.
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Exit with an error when the directory is not a React project.
    #[arg(long)]
    require_react: bool,
}

/// # Handle Analyze Command (`handle_analyze`)
///
/// Loads configuration, resolves the target directory, runs the analyzer and
/// prints the result. An absent result is a normal outcome unless
/// `--require-react` is set.
pub fn handle_analyze(args: AnalyzeArgs) -> Result<()> {
    let cfg = config::load_config().context("Failed to load Vessel configuration")?;

    let project_path = resolve_project_path(args.path, cfg.analyze.default_path.as_deref());
    let format = args.format.unwrap_or_else(|| cfg.output.format());
    info!("Analyzing project at {}", project_path.display());

    let analysis = analyzer::analyze(&project_path);

    if let Some(diagnostic) = analysis.diagnostic() {
        error!(manifest = %diagnostic.manifest.display(), "{}", diagnostic);
    }

    let rendered = match format {
        OutputFormat::Text => render_text(&analysis),
        OutputFormat::Json => render_json(&analysis)?,
    };
    print!("{}", rendered);

    if args.require_react && analysis.into_project().is_none() {
        return Err(VesselError::NotReactProject { path: project_path }.into());
    }
    Ok(())
}

/// Picks the directory to analyze: explicit argument first, then the
/// configured default, then the current directory. `~` is expanded.
fn resolve_project_path(arg: Option<PathBuf>, configured: Option<&str>) -> PathBuf {
    match arg {
        Some(path) => match path.to_str() {
            Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
            None => path,
        },
        None => configured
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".")),
    }
}

fn render_json(analysis: &Analysis) -> Result<String> {
    let mut out = serde_json::to_string_pretty(&analysis.project())
        .context("Failed to serialize analysis result")?;
    out.push('\n');
    Ok(out)
}

fn render_text(analysis: &Analysis) -> String {
    match analysis {
        Analysis::Project(info) => render_project(info),
        Analysis::Absent(reason) => format!("Not a React project: {}\n", reason),
    }
}

fn render_project(info: &ProjectInfo) -> String {
    let build_script = if info.declares_build_script() {
        "declared"
    } else {
        "not declared (using default)"
    };

    let mut out = String::new();
    out.push_str(&format!("┏{}┓\n", RULE_HEAVY));
    out.push_str(&format!("┃ ⚛️  React Project: {}\n", info.name));
    out.push_str(&format!("┣{}┫\n", RULE_HEAVY));
    out.push_str(&format!("┃ 📂 Path:          {}\n", info.path.display()));
    out.push_str(&format!("┃ 🛠️  Build Command: {}\n", info.build_command));
    out.push_str(&format!("┃ 📦 Build Output:  {}\n", info.build_output));
    out.push_str(&format!("┃ 📜 Build Script:  {}\n", build_script));
    out.push_str(&format!("┣{}┫\n", "-".repeat(68)));
    out.push_str(&render_section("Dependencies", &info.dependencies));
    out.push_str(&render_section("Dev Dependencies", &info.dev_dependencies));
    out.push_str(&render_section("Scripts", &info.scripts));
    out.push_str(&format!("┗{}┛\n", RULE_HEAVY));
    out
}

fn render_section(title: &str, entries: &BTreeMap<String, String>) -> String {
    let mut out = format!("┃ {} ({}):\n", title, entries.len());
    if entries.is_empty() {
        out.push_str("┃    (none)\n");
    }
    for (key, value) in entries {
        out.push_str(&format!("┃    - {}: {}\n", key, value));
    }
    out
}
