//! Docs version archiving.
//!
//! Freezes the current stable docs under a version directory and promotes
//! the preview docs to stable:
//!
//! ```text
//! _data/menu_docs_stable.json  → _data/menu_docs_<ver without dots>.json
//! docs/stable/                 → docs/<ver>/          (redirects dropped)
//! _data/menu_docs_preview.json → _data/menu_docs_stable.json
//! docs/preview/                → docs/stable/         (redirects kept from old stable)
//! js/stable/                   → js/<ver>/
//! js/preview/                  → js/stable/
//! ```

mod copy;
mod error;
mod page;

pub use error::ArchiveError;

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{config::SiteConfig, debug, log, utils::plural_count};
use copy::copy_tree;
use page::Page;

const STABLE: &str = "stable";
const PREVIEW: &str = "preview";
const STABLE_TEMP: &str = "stable_temp";

/// Archive the stable docs as `version` and promote preview to stable.
pub fn archive_docs(config: &SiteConfig, version: &str) -> Result<()> {
    validate_version(version)?;
    let layout = Layout::new(config, version);
    layout.check()?;

    log!("archive"; "archiving stable docs as {}", version);

    // Stable → version
    copy_file(&layout.menu(STABLE), &layout.menu(&version.replace('.', "")))?;
    let stable_link = format!("{}/", layout.docs_link(STABLE));
    let version_link = format!("{}/", layout.docs_link(version));
    let count = copy_tree(
        &layout.docs(STABLE),
        &layout.docs(version),
        Some(&mut |_: &Path, content: &str| -> Result<String, ArchiveError> {
            let mut page = Page::parse(content);
            page.set_redirect_from(None);
            page.retarget_links(&stable_link, &version_link);
            Ok(page.render())
        }),
    )?;
    log!("archive"; "{} -> {}", layout.display(&layout.docs(STABLE)), plural_count(count, "file"));

    // Preview → stable
    copy_file(&layout.menu(PREVIEW), &layout.menu(STABLE))?;
    let preview_link = format!("{}/", layout.docs_link(PREVIEW));
    let old_stable = layout.docs(STABLE);
    let temp = layout.docs(STABLE_TEMP);
    let count = copy_tree(
        &layout.docs(PREVIEW),
        &temp,
        Some(&mut |rel: &Path, content: &str| -> Result<String, ArchiveError> {
            let redirect = counterpart_redirect(&old_stable.join(rel))?;
            let mut page = Page::parse(content);
            page.set_redirect_from(redirect);
            page.retarget_links(&preview_link, &stable_link);
            Ok(page.render())
        }),
    )?;
    fs::remove_dir_all(&old_stable).map_err(ArchiveError::io(&old_stable))?;
    move_dir(&temp, &old_stable)?;
    log!("archive"; "{} -> {}", layout.display(&layout.docs(PREVIEW)), plural_count(count, "file"));

    // Scripts
    move_dir(&layout.scripts(STABLE), &layout.scripts(version))?;
    copy_tree(&layout.scripts(PREVIEW), &layout.scripts(STABLE), None)?;

    log!("archive"; "docs {} archived, preview is now stable", version);
    Ok(())
}

/// Reject versions that would escape or clobber the docs directories.
fn validate_version(version: &str) -> Result<(), ArchiveError> {
    let invalid = |reason| Err(ArchiveError::InvalidVersion(version.to_string(), reason));

    if version.trim().is_empty() {
        return invalid("version is empty");
    }
    if version.contains(['/', '\\']) {
        return invalid("path separators are not allowed");
    }
    if version.contains("..") || version == "." {
        return invalid("`.` and `..` are not allowed");
    }
    if [STABLE, PREVIEW, STABLE_TEMP].contains(&version) {
        return invalid("name is reserved");
    }
    Ok(())
}

/// `redirect_from` entry of the old stable page at `path`, if any.
fn counterpart_redirect(path: &Path) -> Result<Option<Vec<String>>, ArchiveError> {
    if !path.is_file() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(ArchiveError::io(path))?;
    Ok(Page::parse(&content).redirect_from())
}

fn copy_file(from: &Path, to: &Path) -> Result<(), ArchiveError> {
    debug!("archive"; "copy {} -> {}", from.display(), to.display());
    fs::copy(from, to).map_err(ArchiveError::io(from))?;
    Ok(())
}

fn move_dir(from: &Path, to: &Path) -> Result<(), ArchiveError> {
    debug!("archive"; "move {} -> {}", from.display(), to.display());
    fs::rename(from, to).map_err(ArchiveError::io(from))
}

// ============================================================================
// Layout
// ============================================================================

/// Resolved archive paths under the site root.
struct Layout<'a> {
    root: &'a Path,
    docs: PathBuf,
    data: PathBuf,
    scripts: PathBuf,
    version: &'a str,
}

impl<'a> Layout<'a> {
    fn new(config: &'a SiteConfig, version: &'a str) -> Self {
        Self {
            root: config.get_root(),
            docs: config.root_join(&config.archive.docs),
            data: config.root_join(&config.archive.data),
            scripts: config.root_join(&config.archive.scripts),
            version,
        }
    }

    fn docs(&self, name: &str) -> PathBuf {
        self.docs.join(name)
    }

    fn scripts(&self, name: &str) -> PathBuf {
        self.scripts.join(name)
    }

    fn menu(&self, name: &str) -> PathBuf {
        self.data.join(format!("menu_docs_{name}.json"))
    }

    /// Site-relative docs path as written in `{% link %}` tags.
    fn docs_link(&self, name: &str) -> String {
        let rel = self.docs.strip_prefix(self.root).unwrap_or(&self.docs);
        let mut link = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        if !link.is_empty() {
            link.push('/');
        }
        link.push_str(name);
        link
    }

    fn display(&self, path: &Path) -> String {
        path.strip_prefix(self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }

    /// Fail before touching anything if a source is missing or a target exists.
    fn check(&self) -> Result<(), ArchiveError> {
        let sources = [
            self.menu(STABLE),
            self.menu(PREVIEW),
            self.docs(STABLE),
            self.docs(PREVIEW),
            self.scripts(STABLE),
            self.scripts(PREVIEW),
        ];
        if let Some(missing) = sources.into_iter().find(|p| !p.exists()) {
            return Err(ArchiveError::MissingSource(missing));
        }

        let targets = [
            self.docs(self.version),
            self.docs(STABLE_TEMP),
            self.scripts(self.version),
        ];
        if let Some(existing) = targets.into_iter().find(|p| p.exists()) {
            return Err(ArchiveError::AlreadyExists(existing));
        }
        Ok(())
    }
}
