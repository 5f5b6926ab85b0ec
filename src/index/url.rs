//! URL derivation for indexed documents.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

use crate::core::ContentType;

/// `YYYY-MM-DD-slug` blog file stem.
static DATE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)-(\d+)-(\d+)-(.*)$").unwrap());

/// Compute the site URL of a content file.
///
/// `site_relative` is the file path relative to the site root and
/// `root_relative` the path relative to its content root. Blog files named
/// `YYYY-MM-DD-slug.md` map to `/YYYY/MM/DD/slug`; everything else maps to
/// `/` plus the extension-less site-relative path.
///
/// ```text
/// _posts/2021-05-03-my-post.md  →  /2021/05/03/my-post
/// docs/stable/guide/intro.md    →  /docs/stable/guide/intro
/// ```
pub fn document_url(site_relative: &Path, root_relative: &Path, kind: ContentType) -> String {
    if kind.is_blog() {
        let stem = url_path(root_relative);
        if DATE_PREFIX.is_match(&stem) {
            return DATE_PREFIX.replace(&stem, "/$1/$2/$3/$4").into_owned();
        }
    }
    format!("/{}", url_path(site_relative))
}

/// Join the normal components of `path` with `/`, dropping the extension.
fn url_path(path: &Path) -> String {
    let stem = path.with_extension("");
    let mut url = String::new();
    for component in stem.components() {
        if let std::path::Component::Normal(s) = component {
            if !url.is_empty() {
                url.push('/');
            }
            url.push_str(&s.to_string_lossy());
        }
    }
    url
}
