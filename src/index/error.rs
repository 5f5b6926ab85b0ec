//! Index build errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an index build.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("No 3 splits for file '{}', missing header?", .0.display())]
    MissingHeader(PathBuf),

    #[error("No title found for file '{}'", .0.display())]
    MissingTitle(PathBuf),

    #[error("Failed to read '{}'", .0.display())]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Content root '{}' is not a directory", .0.display())]
    MissingRoot(PathBuf),

    #[error("Failed to walk '{}'", .0.display())]
    Walk(PathBuf, #[source] jwalk::Error),

    #[error("Failed to write search index '{}'", .0.display())]
    Write(PathBuf, #[source] std::io::Error),

    #[error("Failed to serialize search index")]
    Serialize(#[from] serde_json::Error),
}
