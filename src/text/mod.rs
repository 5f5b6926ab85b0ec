//! Plain-text helpers for index fields.
//!
//! - [`sanitize`]: body text, blurb and category sanitizers
//! - [`shorten`]: width-limited truncation at word boundaries

mod sanitize;
mod shorten;

pub use sanitize::{sanitize_blurb, sanitize_category, sanitize_text};
use shorten::shorten;

/// Collapse every whitespace run to one space and trim both ends.
#[inline]
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  a \t b\n\n c  "), "a b c");
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace(" \r\n\t "), "");
    }

    #[test]
    fn test_normalize_whitespace_idempotent() {
        for input in ["  x  y ", "a\u{00a0}\u{2003}b", "\tone\ntwo  three\r\n", ""] {
            let once = normalize_whitespace(input);
            assert_eq!(normalize_whitespace(&once), once);
        }
    }
}
