//! Driver configuration, resolved from the environment.

use std::path::PathBuf;

use satchel_inventory::{DEFAULT_EXPORT_FILE, DEFAULT_IMPORT_FILE};

pub const IMPORT_PATH_VAR: &str = "SATCHEL_IMPORT_PATH";
pub const EXPORT_PATH_VAR: &str = "SATCHEL_EXPORT_PATH";

/// Where the walkthrough reads its import file and writes its export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub import_path: PathBuf,
    pub export_path: PathBuf,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            import_path: PathBuf::from(DEFAULT_IMPORT_FILE),
            export_path: PathBuf::from(DEFAULT_EXPORT_FILE),
        }
    }
}

impl DemoConfig {
    pub fn new(import_path: impl Into<PathBuf>, export_path: impl Into<PathBuf>) -> Self {
        Self {
            import_path: import_path.into(),
            export_path: export_path.into(),
        }
    }

    /// Read `SATCHEL_IMPORT_PATH` / `SATCHEL_EXPORT_PATH`, falling back to the
    /// default file names.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            import_path: resolve(&lookup, IMPORT_PATH_VAR, defaults.import_path),
            export_path: resolve(&lookup, EXPORT_PATH_VAR, defaults.export_path),
        }
    }
}

fn resolve(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: PathBuf) -> PathBuf {
    match lookup(key).filter(|v| !v.trim().is_empty()) {
        Some(value) => PathBuf::from(value),
        None => {
            tracing::warn!("{key} not set; using {}", default.display());
            default
        }
    }
}
