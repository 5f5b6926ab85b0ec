//! Content type definitions.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Extension of indexable content files.
pub const MARKDOWN_EXTENSION: &str = "md";

/// Kind of content a root holds, recorded as the `type` of each document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Versioned documentation pages
    Documentation,
    /// Blog posts with date-prefixed filenames
    Blog,
    /// Anything else
    #[default]
    Other,
}

impl ContentType {
    /// Name as written to the index.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Documentation => "documentation",
            Self::Blog => "blog",
            Self::Other => "other",
        }
    }

    /// Blog files get date-path URLs.
    #[inline]
    pub const fn is_blog(self) -> bool {
        matches!(self, Self::Blog)
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Check if a path is a markdown content file.
#[inline]
pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == MARKDOWN_EXTENSION)
}
