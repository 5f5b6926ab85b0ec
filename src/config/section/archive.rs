//! `[archive]` section configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::ConfigDiagnostics;

/// Directories touched by `docdex archive`, relative to the site root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    /// Holds `stable/`, `preview/` and archived version directories.
    pub docs: PathBuf,
    /// Holds the `menu_docs_*.json` navigation files.
    pub data: PathBuf,
    /// Holds versioned script directories (`stable/`, `preview/`).
    pub scripts: PathBuf,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            docs: "docs".into(),
            data: "_data".into(),
            scripts: "js".into(),
        }
    }
}

impl ArchiveConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, path) in [
            ("archive.docs", &self.docs),
            ("archive.data", &self.data),
            ("archive.scripts", &self.scripts),
        ] {
            if path.is_absolute() {
                diag.error(
                    field,
                    format!("`{}` must be relative to the site root", path.display()),
                );
            }
        }
    }
}
