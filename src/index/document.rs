//! Single-file indexing: front matter, body text and derived metadata.

use std::fs;
use std::path::Path;

use super::{DocumentRecord, IndexError, url::document_url};
use crate::config::ContentRoot;
use crate::core::is_markdown;
use crate::markdown::{self, FrontMatter, FrontMatterError, extract_text};
use crate::text::{sanitize_blurb, sanitize_category, sanitize_text};

/// Index one content file found under `root`.
///
/// Returns `Ok(None)` for non-markdown files. `site_root` is the directory
/// content root paths and URLs are relative to.
pub fn index_file(
    path: &Path,
    root: &ContentRoot,
    site_root: &Path,
) -> Result<Option<DocumentRecord>, IndexError> {
    if !is_markdown(path) {
        return Ok(None);
    }

    let content =
        fs::read_to_string(path).map_err(|err| IndexError::Read(path.to_path_buf(), err))?;

    let (meta, body) = FrontMatter::extract(&content).map_err(|err| match err {
        FrontMatterError::MissingHeader => IndexError::MissingHeader(path.to_path_buf()),
        FrontMatterError::MissingTitle => IndexError::MissingTitle(path.to_path_buf()),
    })?;

    let doc = markdown::parse(body);
    let text = extract_text(&doc);

    let blurb = if !meta.blurb.is_empty() {
        meta.blurb
    } else if doc.has_paragraph_child() {
        sanitize_blurb(&text)
    } else {
        String::new()
    };

    let site_relative = path.strip_prefix(site_root).unwrap_or(path);
    let category = if !meta.category.is_empty() {
        meta.category
    } else {
        site_relative
            .parent()
            .and_then(Path::file_name)
            .map(|name| sanitize_category(&name.to_string_lossy()))
            .unwrap_or_default()
    };

    let root_dir = site_root.join(&root.path);
    let root_relative = path.strip_prefix(&root_dir).unwrap_or(site_relative);

    Ok(Some(DocumentRecord {
        title: meta.title,
        text: sanitize_text(&text),
        category,
        url: document_url(site_relative, root_relative, root.kind),
        blurb,
        kind: root.kind,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ContentType;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, content: &str) -> PathBuf {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    fn docs_root() -> ContentRoot {
        ContentRoot::new("docs/stable", ContentType::Documentation)
    }

    #[test]
    fn test_index_documentation_file() {
        let dir = TempDir::new().unwrap();
        let path = write(
            dir.path(),
            "docs/stable/guide/hello.md",
            "---\ntitle: \"Hello\"\n---\n# H\n\nSome **text** here.",
        );

        let record = index_file(&path, &docs_root(), dir.path()).unwrap().unwrap();
        assert_eq!(record.title, "Hello");
        assert_eq!(record.category, "Guide");
        assert_eq!(record.kind, ContentType::Documentation);
        assert_eq!(record.url, "/docs/stable/guide/hello");
        assert_eq!(record.blurb, "H Some text here.");
        assert!(record.text.contains("some text here"));
    }

    #[test]
    fn test_front_matter_overrides_derived_fields() {
        let dir = TempDir::new().unwrap();
        let path = write(
            dir.path(),
            "docs/stable/sql/select.md",
            "---\ntitle: SELECT\nblurb: The <code>SELECT</code> statement\ncategory: Queries\n---\nBody text.",
        );

        let record = index_file(&path, &docs_root(), dir.path()).unwrap().unwrap();
        assert_eq!(record.blurb, "The SELECT statement");
        assert_eq!(record.category, "Queries");
        assert_eq!(record.text, "body text");
    }

    #[test]
    fn test_sql_category_and_no_paragraph_blurb() {
        let dir = TempDir::new().unwrap();
        let path = write(
            dir.path(),
            "docs/stable/sql/list.md",
            "---\ntitle: List\n---\n- only\n- a list",
        );

        let record = index_file(&path, &docs_root(), dir.path()).unwrap().unwrap();
        assert_eq!(record.category, "SQL");
        assert_eq!(record.blurb, "");
        assert_eq!(record.text, "only a list");
    }

    #[test]
    fn test_blog_post() {
        let dir = TempDir::new().unwrap();
        let path = write(
            dir.path(),
            "_posts/2021-05-03-my-post.md",
            "---\ntitle: My Post\n---\nIntro <img src=\"a.png\"> paragraph.",
        );
        let root = ContentRoot::new("_posts", ContentType::Blog);

        let record = index_file(&path, &root, dir.path()).unwrap().unwrap();
        assert_eq!(record.url, "/2021/05/03/my-post");
        assert_eq!(record.kind, ContentType::Blog);
        // Parent directory "_posts" keeps its leading separator as a space
        assert_eq!(record.category, " Posts");
        assert_eq!(record.text, "intro paragraph");
    }

    #[test]
    fn test_non_markdown_skipped() {
        let dir = TempDir::new().unwrap();
        let path = write(dir.path(), "docs/stable/logo.svg", "<svg/>");
        assert!(index_file(&path, &docs_root(), dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_errors_name_the_file() {
        let dir = TempDir::new().unwrap();
        let no_header = write(dir.path(), "docs/stable/a.md", "# No header");
        let no_title = write(dir.path(), "docs/stable/b.md", "---\nblurb: x\n---\nbody");

        let err = index_file(&no_header, &docs_root(), dir.path()).unwrap_err();
        assert!(matches!(&err, IndexError::MissingHeader(p) if p == &no_header));

        let err = index_file(&no_title, &docs_root(), dir.path()).unwrap_err();
        assert!(matches!(&err, IndexError::MissingTitle(p) if p == &no_title));
        assert!(err.to_string().contains("b.md"));
    }

    #[test]
    fn test_unreadable_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("docs/stable/gone.md");
        let err = index_file(&missing, &docs_root(), dir.path()).unwrap_err();
        assert!(matches!(err, IndexError::Read(..)));
    }
}
