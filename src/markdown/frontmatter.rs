//! Front-matter header parsing.
//!
//! A content file looks like:
//!
//! ```text
//! ---
//! title: "Getting Started"
//! blurb: Install the CLI and run your first query.
//! category: getting_started
//! ---
//!
//! # Markdown body
//! ```

use thiserror::Error;

use crate::text::sanitize_blurb;

/// Header delimiter.
const DELIMITER: &str = "---";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FrontMatterError {
    #[error("missing header delimiters")]
    MissingHeader,
    #[error("missing title")]
    MissingTitle,
}

/// Recognized header fields. Empty strings mean "not specified".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: String,
    /// Already blurb-sanitized
    pub blurb: String,
    pub category: String,
}

impl FrontMatter {
    /// Split `content` into its header and body and parse the header.
    ///
    /// The text is split at the first two `---` markers; whatever precedes
    /// the first one is ignored.
    pub fn extract(content: &str) -> Result<(Self, &str), FrontMatterError> {
        let mut parts = content.splitn(3, DELIMITER);
        let (Some(_), Some(header), Some(body)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(FrontMatterError::MissingHeader);
        };

        let meta = Self::parse(header);
        if meta.title.is_empty() {
            return Err(FrontMatterError::MissingTitle);
        }
        Ok((meta, body))
    }

    /// Parse `key: value` header lines.
    ///
    /// Lines without a colon and unknown keys are ignored; a repeated key
    /// keeps its last value.
    pub fn parse(header: &str) -> Self {
        let mut meta = Self::default();

        for line in header.split('\n') {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = value.trim();

            match key.trim().to_lowercase().as_str() {
                "title" => meta.title = unquote(value).to_string(),
                "blurb" => meta.blurb = sanitize_blurb(value),
                "category" => meta.category = value.to_string(),
                _ => {}
            }
        }

        meta
    }
}

/// Drop one leading and one trailing `"`.
fn unquote(value: &str) -> &str {
    let value = value.strip_prefix('"').unwrap_or(value);
    value.strip_suffix('"').unwrap_or(value)
}
