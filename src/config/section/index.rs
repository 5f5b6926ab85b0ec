//! `[index]` section configuration.
//!
//! ```toml
//! [index]
//! output = "data/search_data.json"
//!
//! [[index.roots]]
//! path = "docs/stable"
//! type = "documentation"
//!
//! [[index.roots]]
//! path = "_posts"
//! type = "blog"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

use crate::config::ConfigDiagnostics;
use crate::core::ContentType;

/// A directory whose markdown files are indexed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRoot {
    /// Directory path relative to the site root.
    pub path: PathBuf,
    /// Type recorded for every document under this root.
    #[serde(default, rename = "type")]
    pub kind: ContentType,
}

impl ContentRoot {
    pub fn new(path: impl Into<PathBuf>, kind: ContentType) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

/// Search index settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Output file path relative to the site root.
    pub output: PathBuf,
    /// Content roots, walked in order.
    pub roots: Vec<ContentRoot>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            output: "data/search_data.json".into(),
            roots: vec![
                ContentRoot::new("docs/stable", ContentType::Documentation),
                ContentRoot::new("_posts", ContentType::Blog),
            ],
        }
    }
}

impl IndexConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.output.as_os_str().is_empty() {
            diag.error("index.output", "output path is empty");
        } else if self.output.is_absolute() {
            diag.error_with_hint(
                "index.output",
                format!("`{}` must be relative to the site root", self.output.display()),
                "remove the leading `/`",
            );
        }

        if self.roots.is_empty() {
            diag.error_with_hint(
                "index.roots",
                "no content roots configured",
                "add at least one [[index.roots]] entry",
            );
        }

        let mut seen = HashSet::new();
        for root in &self.roots {
            if root.path.is_absolute() {
                diag.error(
                    "index.roots.path",
                    format!("`{}` must be relative to the site root", root.path.display()),
                );
            }
            if !seen.insert(&root.path) {
                diag.error(
                    "index.roots.path",
                    format!("`{}` is listed more than once", root.path.display()),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.index.output, PathBuf::from("data/search_data.json"));
        assert_eq!(
            config.index.roots,
            vec![
                ContentRoot::new("docs/stable", ContentType::Documentation),
                ContentRoot::new("_posts", ContentType::Blog),
            ]
        );
    }

    #[test]
    fn test_custom_roots_replace_defaults() {
        let config = test_parse_config(
            "[index]\noutput = \"public/search.json\"\n\n[[index.roots]]\npath = \"docs/preview\"\ntype = \"documentation\"\n\n[[index.roots]]\npath = \"pages\"\n",
        );
        assert_eq!(config.index.output, PathBuf::from("public/search.json"));
        assert_eq!(config.index.roots.len(), 2);
        assert_eq!(config.index.roots[1].kind, ContentType::Other);
    }

    #[test]
    fn test_validate_rejects_bad_roots() {
        let config = IndexConfig {
            output: "/abs/search.json".into(),
            roots: vec![
                ContentRoot::new("docs", ContentType::Documentation),
                ContentRoot::new("docs", ContentType::Blog),
                ContentRoot::new("/srv/posts", ContentType::Blog),
            ],
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert_eq!(diag.len(), 3);
    }

    #[test]
    fn test_validate_requires_roots() {
        let config = IndexConfig {
            roots: Vec::new(),
            ..IndexConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, "index.roots");
    }

    #[test]
    fn test_default_validates() {
        let mut diag = ConfigDiagnostics::new();
        IndexConfig::default().validate(&mut diag);
        assert!(diag.is_empty());
    }
}
