//! # Manifest Descriptor
//!
//! File: cli/src/analyzer/manifest.rs
//!
//! ## Overview
//!
//! Loads a `package.json` file and extracts the handful of fields the React
//! analyzer cares about. Manifests in the wild are loosely typed, so every
//! field is read defensively:
//!
//! - `name` must be a string, otherwise the placeholder `react-app` is used.
//! - `dependencies`, `devDependencies` and `scripts` must be objects,
//!   otherwise they are treated as empty.
//! - Inside those objects, non-string values keep their key; the value is
//!   recorded as its compact JSON text.
//!
use crate::core::error::VesselError;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Name used when the manifest does not declare a usable `name`.
pub const DEFAULT_PROJECT_NAME: &str = "react-app";

/// The subset of `package.json` consulted during analysis.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ManifestDescriptor {
    pub name: Option<String>,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
    pub scripts: BTreeMap<String, String>,
}

impl ManifestDescriptor {
    /// Reads and parses the manifest at `path`.
    ///
    /// The file handle lives only for the duration of `fs::read_to_string`.
    /// Read and parse failures are reported as the matching `VesselError`
    /// variant so the caller can decide how to surface them.
    pub fn load(path: &Path) -> Result<Self, VesselError> {
        let content = fs::read_to_string(path).map_err(|source| VesselError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| VesselError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses manifest text. Only JSON syntax errors fail; a document that is
    /// valid JSON but not an object behaves like an empty manifest.
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(content)?;
        Ok(Self::from_value(&value))
    }

    fn from_value(value: &Value) -> Self {
        let Some(root) = value.as_object() else {
            debug!("Manifest root is not a JSON object; treating every field as absent.");
            return Self::default();
        };

        Self {
            name: root.get("name").and_then(Value::as_str).map(str::to_string),
            dependencies: string_map(root, "dependencies"),
            dev_dependencies: string_map(root, "devDependencies"),
            scripts: string_map(root, "scripts"),
        }
    }

    /// The declared name, or the placeholder when none is usable.
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_PROJECT_NAME)
    }

    /// True when `package` appears in either dependency mapping.
    pub fn depends_on(&self, package: &str) -> bool {
        self.dependencies.contains_key(package) || self.dev_dependencies.contains_key(package)
    }
}

fn string_map(root: &Map<String, Value>, key: &str) -> BTreeMap<String, String> {
    match root.get(key) {
        Some(Value::Object(entries)) => entries
            .iter()
            .map(|(name, value)| {
                let value = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (name.clone(), value)
            })
            .collect(),
        Some(other) => {
            debug!("Manifest field '{}' is not an object ({}); using an empty mapping.", key, other);
            BTreeMap::new()
        }
        None => BTreeMap::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_manifest() {
        let manifest = ManifestDescriptor::parse(
            r#"{
                "name": "storefront",
                "dependencies": {"react": "^18.2.0", "react-dom": "^18.2.0"},
                "devDependencies": {"vite": "^5.0.0"},
                "scripts": {"build": "vite build", "dev": "vite"}
            }"#,
        )
        .unwrap();

        assert_eq!(manifest.name_or_default(), "storefront");
        assert_eq!(manifest.dependencies["react"], "^18.2.0");
        assert_eq!(manifest.dev_dependencies["vite"], "^5.0.0");
        assert_eq!(manifest.scripts.len(), 2);
        assert!(manifest.depends_on("react"));
        assert!(!manifest.depends_on("vue"));
    }

    #[test]
    fn test_missing_fields_default() {
        let manifest = ManifestDescriptor::parse("{}").unwrap();
        assert_eq!(manifest, ManifestDescriptor::default());
        assert_eq!(manifest.name_or_default(), DEFAULT_PROJECT_NAME);
    }

    #[test]
    fn test_wrong_shapes_default() {
        let manifest = ManifestDescriptor::parse(
            r#"{"name": 7, "dependencies": ["react"], "devDependencies": null, "scripts": "build"}"#,
        )
        .unwrap();

        assert_eq!(manifest.name, None);
        assert_eq!(manifest.name_or_default(), "react-app");
        assert!(manifest.dependencies.is_empty());
        assert!(manifest.dev_dependencies.is_empty());
        assert!(manifest.scripts.is_empty());
    }

    #[test]
    fn test_non_string_values_keep_key() {
        let manifest =
            ManifestDescriptor::parse(r#"{"dependencies": {"react": {"version": "18"}}}"#).unwrap();
        assert!(manifest.depends_on("react"));
        assert_eq!(manifest.dependencies["react"], r#"{"version":"18"}"#);
    }

    #[test]
    fn test_non_object_root_is_empty_manifest() {
        let manifest = ManifestDescriptor::parse("[1, 2, 3]").unwrap();
        assert_eq!(manifest, ManifestDescriptor::default());
    }

    #[test]
    fn test_syntax_error_fails() {
        assert!(ManifestDescriptor::parse("{\"dependencies\": ").is_err());
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ManifestDescriptor::load(&dir.path().join("package.json")).unwrap_err();
        assert!(matches!(err, VesselError::ManifestRead { .. }));
    }

    #[test]
    fn test_load_invalid_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, "not json").unwrap();
        let err = ManifestDescriptor::load(&path).unwrap_err();
        assert!(matches!(err, VesselError::ManifestParse { .. }));
    }
}
