//! Directory tree copying with markdown rewriting.

use std::fs;
use std::path::Path;

use super::ArchiveError;
use crate::core::is_markdown;

/// Rewrites one markdown file: `(path relative to the tree root, content)`.
pub type Rewrite<'a> = dyn FnMut(&Path, &str) -> Result<String, ArchiveError> + 'a;

/// Recursively copy `src` into `dst`.
///
/// Markdown files go through `rewrite` when one is given; everything else
/// is copied byte-for-byte. Returns the number of files written.
pub fn copy_tree(
    src: &Path,
    dst: &Path,
    mut rewrite: Option<&mut Rewrite<'_>>,
) -> Result<usize, ArchiveError> {
    let mut count = 0;
    copy_dir(src, dst, Path::new(""), &mut rewrite, &mut count)?;
    Ok(count)
}

fn copy_dir(
    src_root: &Path,
    dst_root: &Path,
    rel: &Path,
    rewrite: &mut Option<&mut Rewrite<'_>>,
    count: &mut usize,
) -> Result<(), ArchiveError> {
    let src_dir = src_root.join(rel);
    let dst_dir = dst_root.join(rel);
    fs::create_dir_all(&dst_dir).map_err(ArchiveError::io(&dst_dir))?;

    let mut entries = fs::read_dir(&src_dir)
        .and_then(|entries| entries.collect::<Result<Vec<_>, _>>())
        .map_err(ArchiveError::io(&src_dir))?;
    entries.sort_by_key(fs::DirEntry::file_name);

    for entry in entries {
        let rel_path = rel.join(entry.file_name());
        let src_path = entry.path();

        if src_path.is_dir() {
            copy_dir(src_root, dst_root, &rel_path, rewrite, count)?;
            continue;
        }

        let dst_path = dst_root.join(&rel_path);
        match rewrite {
            Some(rewrite) if is_markdown(&src_path) => {
                let content =
                    fs::read_to_string(&src_path).map_err(ArchiveError::io(&src_path))?;
                let content = (*rewrite)(&rel_path, &content)?;
                fs::write(&dst_path, content).map_err(ArchiveError::io(&dst_path))?;
            }
            _ => {
                fs::copy(&src_path, &dst_path).map_err(ArchiveError::io(&dst_path))?;
            }
        }
        *count += 1;
    }

    Ok(())
}
