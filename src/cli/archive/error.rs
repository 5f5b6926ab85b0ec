//! Archive errors.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Invalid version `{0}`: {1}")]
    InvalidVersion(String, &'static str),

    #[error("Archive source `{}` does not exist", .0.display())]
    MissingSource(PathBuf),

    #[error("Archive target `{}` already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error("IO error at `{}`", .0.display())]
    Io(PathBuf, #[source] io::Error),
}

impl ArchiveError {
    /// `map_err` adapter attaching `path` to an I/O error.
    pub fn io(path: &Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |err| Self::Io(path.to_path_buf(), err)
    }
}
