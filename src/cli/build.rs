//! Search index build orchestration.
//!
//! Phases:
//! - **Collect** - Walk every configured content root, in order
//! - **Write** - Sort by title and serialize the index
//!
//! The output file is only touched after every root was indexed.

use anyhow::Result;

use crate::{
    config::SiteConfig,
    index::{self, DocumentRecord},
    log,
    utils::plural_count,
};

/// Build the search index for the configured site.
///
/// Returns the number of indexed documents.
pub fn build_index(config: &SiteConfig) -> Result<usize> {
    let records = collect_records(config)?;
    let count = records.len();
    write_records(config, records)?;
    Ok(count)
}

/// Index all content roots into one accumulator.
fn collect_records(config: &SiteConfig) -> Result<Vec<DocumentRecord>> {
    let mut records = Vec::new();
    for root in &config.index.roots {
        index::index_root(root, config.get_root(), &mut records)?;
    }

    log!(
        "index";
        "collected {} from {}",
        plural_count(records.len(), "document"),
        plural_count(config.index.roots.len(), "root")
    );
    Ok(records)
}

fn write_records(config: &SiteConfig, mut records: Vec<DocumentRecord>) -> Result<()> {
    let output = config.output_path();
    index::write_index(&mut records, &output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::IndexError;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn site() -> TempDir {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "docs/stable/guide/hello.md",
            "---\ntitle: \"Hello\"\n---\n# H\n\nSome **text** here.",
        );
        write(
            dir.path(),
            "docs/stable/sql/aggregates.md",
            "---\ntitle: Aggregates\n---\nSum things up.",
        );
        write(
            dir.path(),
            "_posts/2021-05-03-my-post.md",
            "---\ntitle: \"Zebra post\"\nblurb: About zebras\n---\nStripes.",
        );
        dir
    }

    fn read_index(config: &SiteConfig) -> serde_json::Value {
        let bytes = fs::read(config.output_path()).unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_build_index_end_to_end() {
        let dir = site();
        let config = SiteConfig::with_root(dir.path());

        assert_eq!(build_index(&config).unwrap(), 3);

        let index = read_index(&config);
        let data = index["data"].as_array().unwrap();
        let titles: Vec<_> = data.iter().map(|r| r["title"].as_str().unwrap()).collect();
        assert_eq!(titles, ["Aggregates", "Hello", "Zebra post"]);

        let hello = &data[1];
        assert_eq!(hello["category"], "Guide");
        assert_eq!(hello["type"], "documentation");
        assert_eq!(hello["url"], "/docs/stable/guide/hello");
        assert_eq!(hello["blurb"], "H Some text here.");
        assert_eq!(data[0]["category"], "SQL");
        assert_eq!(data[2]["url"], "/2021/05/03/my-post");
        assert_eq!(data[2]["type"], "blog");
        assert_eq!(data[2]["blurb"], "About zebras");
    }

    #[test]
    fn test_build_index_is_byte_identical_across_runs() {
        let dir = site();
        let config = SiteConfig::with_root(dir.path());

        build_index(&config).unwrap();
        let first = fs::read(config.output_path()).unwrap();
        build_index(&config).unwrap();
        let second = fs::read(config.output_path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_failure_writes_no_output() {
        let dir = site();
        write(dir.path(), "_posts/2022-01-01-broken.md", "---\ntitle: Broken\n");
        let config = SiteConfig::with_root(dir.path());

        let err = build_index(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<IndexError>(),
            Some(IndexError::MissingHeader(p)) if p.ends_with("2022-01-01-broken.md")
        ));
        assert!(!config.output_path().exists());
    }

    #[test]
    fn test_custom_roots_and_output() {
        let dir = site();
        write(dir.path(), "pages/about.md", "---\ntitle: About\n---\nWho we are.");

        let mut config = crate::config::test_parse_config(
            "[index]\noutput = \"public/search.json\"\n\n[[index.roots]]\npath = \"pages\"\n",
        );
        config.set_root(dir.path());

        assert_eq!(build_index(&config).unwrap(), 1);
        let index = read_index(&config);
        assert_eq!(index["data"][0]["type"], "other");
        assert_eq!(index["data"][0]["url"], "/pages/about");
        assert!(dir.path().join("public/search.json").exists());
    }
}
