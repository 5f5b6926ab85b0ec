//! Content root traversal.

use jwalk::{Parallelism, WalkDir};
use std::path::Path;

use super::{DocumentRecord, IndexError, document::index_file};
use crate::config::ContentRoot;
use crate::debug;

/// Index every file under `root`, appending records to `records`.
///
/// The walk is serial and sorted by file name, following symlinks. Hidden
/// files and directories are visited too. The first failing file aborts the
/// walk.
pub fn index_root(
    root: &ContentRoot,
    site_root: &Path,
    records: &mut Vec<DocumentRecord>,
) -> Result<(), IndexError> {
    let dir = site_root.join(&root.path);
    if !dir.is_dir() {
        return Err(IndexError::MissingRoot(dir));
    }

    let before = records.len();
    let walker = WalkDir::new(&dir)
        .sort(true)
        .skip_hidden(false)
        .follow_links(true)
        .parallelism(Parallelism::Serial);

    for entry in walker {
        let entry = entry.map_err(|err| IndexError::Walk(dir.clone(), err))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if let Some(record) = index_file(&path, root, site_root)? {
            debug!("index"; "{} -> {}", path.display(), record.url);
            records.push(record);
        }
    }

    debug!(
        "index";
        "{} ({}): {} documents",
        root.path.display(),
        root.kind,
        records.len() - before
    );
    Ok(())
}
