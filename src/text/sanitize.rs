//! Sanitizers turning extracted markdown text into index fields.

use regex::Regex;
use std::sync::LazyLock;

use super::{normalize_whitespace, shorten};

/// Maximum blurb length in characters, placeholder included.
pub const BLURB_WIDTH: usize = 120;

/// Appended to truncated blurbs.
pub const BLURB_PLACEHOLDER: &str = "...";

/// Category rendered as an acronym instead of title case.
const ACRONYM_CATEGORY: &str = "sql";

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<.*?>").unwrap());
static IMG_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<img\s+[^>]*>").unwrap());
static IMG_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"img\s+src\s+\S+").unwrap());
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap());

/// Sanitize extracted body text for the `text` field.
///
/// Output holds only lowercase word characters, hyphens and single spaces.
pub fn sanitize_text(text: &str) -> String {
    let text = HTML_TAG.replace_all(text, "");
    let text = strip_image_directives(&text).to_lowercase();
    let text = NON_WORD.replace_all(&text, " ");
    normalize_whitespace(&text)
}

/// Sanitize a blurb: drop tags and quotes, then shorten to [`BLURB_WIDTH`].
pub fn sanitize_blurb(text: &str) -> String {
    let text = IMG_TAG.replace_all(text, "");
    let text = HTML_TAG.replace_all(&text, "");
    let text = text.replace('"', "");
    shorten(text.trim(), BLURB_WIDTH, BLURB_PLACEHOLDER)
}

/// Render a directory or front-matter category as a display label.
///
/// `getting_started` → `Getting Started`, `sql` → `SQL`.
pub fn sanitize_category(category: &str) -> String {
    let category = category.replace('_', " ");
    if category == ACRONYM_CATEGORY {
        return ACRONYM_CATEGORY.to_uppercase();
    }
    title_case(&category)
}

/// Title-case every cased letter that follows an uncased character,
/// lower-case the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_cased = false;
    for c in text.chars() {
        if prev_cased {
            out.extend(c.to_lowercase());
        } else {
            push_titlecase(c, &mut out);
        }
        prev_cased = is_cased(c);
    }
    out
}

/// Push the titlecase form of `c`, which differs from its uppercase form
/// for digraphs, some Greek letters and letters whose capital is two letters.
fn push_titlecase(c: char, out: &mut String) {
    let title = match c {
        'Ǆ' | 'ǅ' | 'ǆ' => 'ǅ',
        'Ǉ' | 'ǈ' | 'ǉ' => 'ǈ',
        'Ǌ' | 'ǋ' | 'ǌ' => 'ǋ',
        'Ǳ' | 'ǲ' | 'ǳ' => 'ǲ',
        // Ypogegrammeni takes the prosgegrammeni capital
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            char::from_u32(c as u32 + 8).unwrap_or(c)
        }
        '\u{1FB3}' => '\u{1FBC}',
        '\u{1FC3}' => '\u{1FCC}',
        '\u{1FF3}' => '\u{1FFC}',
        c if is_greek_titlecase(c) => c,
        'ŉ' => {
            out.push_str("\u{02BC}N");
            return;
        }
        _ => {
            // `ß` → `Ss`, `ﬁ` → `Fi`
            let mut upper = c.to_uppercase();
            out.extend(upper.next());
            for rest in upper {
                out.extend(rest.to_lowercase());
            }
            return;
        }
    };
    out.push(title);
}

fn is_greek_titlecase(c: char) -> bool {
    matches!(
        c,
        '\u{1F88}'..='\u{1F8F}'
            | '\u{1F98}'..='\u{1F9F}'
            | '\u{1FA8}'..='\u{1FAF}'
            | '\u{1FBC}'
            | '\u{1FCC}'
            | '\u{1FFC}'
    )
}

/// Letters with case, titlecase digraphs included.
fn is_cased(c: char) -> bool {
    c.is_lowercase()
        || c.is_uppercase()
        || matches!(c, 'ǅ' | 'ǈ' | 'ǋ' | 'ǲ')
        || is_greek_titlecase(c)
}

/// Replace `img src <path> ...` runs with a single space.
///
/// A run extends from the path to the next ` <word> ` sequence, a line
/// break, or the end of the text, whichever comes first.
fn strip_image_directives(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut pos = 0;

    while let Some(m) = IMG_DIRECTIVE.find_at(text, pos) {
        let end = directive_end(text, m.end());
        out.push_str(&text[last..m.start()]);
        out.push(' ');
        last = end;
        pos = end;
    }
    out.push_str(&text[last..]);
    out
}

/// First offset at or after `from` where a directive run stops.
fn directive_end(text: &str, from: usize) -> usize {
    for (offset, c) in text[from..].char_indices() {
        let at = from + offset;
        if c == '\n' || starts_with_spaced_word(&text[at..]) {
            return at;
        }
    }
    text.len()
}

/// `<space><word chars><space>` at the start of `s`.
fn starts_with_spaced_word(s: &str) -> bool {
    let mut chars = s.chars();
    if !chars.next().is_some_and(char::is_whitespace) {
        return false;
    }
    let mut word_len = 0;
    for c in chars {
        if c.is_alphanumeric() || c == '_' {
            word_len += 1;
        } else {
            return word_len > 0 && c.is_whitespace();
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_text_basic() {
        assert_eq!(
            sanitize_text("  Some   **Text** here.  "),
            "some text here"
        );
    }

    #[test]
    fn test_sanitize_text_strips_tags() {
        assert_eq!(
            sanitize_text("Use <b>bold</b> and <a href=\"x\">links</a>!"),
            "use bold and links"
        );
    }

    #[test]
    fn test_sanitize_text_keeps_word_chars() {
        assert_eq!(
            sanitize_text("read_csv() vs. read-parquet: 3.5x faster"),
            "read_csv vs read-parquet 3 5x faster"
        );
    }

    #[test]
    fn test_sanitize_text_strips_image_directive() {
        assert_eq!(
            sanitize_text("before img src /images/logo.png width=100 the end"),
            "before the end"
        );
        assert_eq!(sanitize_text("img src /images/logo.png"), "");
    }

    #[test]
    fn test_sanitize_text_output_alphabet() {
        let out = sanitize_text("Ünïcode — “quotes”, TABS\tand\nNEWLINES; <tag> 42% done?!");
        assert!(!out.contains("  "));
        assert_eq!(out, out.trim());
        assert!(
            out.chars()
                .all(|c| c == ' ' || c == '_' || c == '-' || c.is_alphanumeric())
        );
        assert!(!out.chars().any(char::is_uppercase));
    }

    #[test]
    fn test_sanitize_blurb_strips_markup() {
        assert_eq!(
            sanitize_blurb("  <img src=\"a.png\" alt=\"x\">A \"quoted\" <em>blurb</em> "),
            "A quoted blurb"
        );
    }

    #[test]
    fn test_sanitize_blurb_truncates() {
        let long = "word ".repeat(60);
        let blurb = sanitize_blurb(&long);
        assert!(blurb.chars().count() <= BLURB_WIDTH);
        assert!(blurb.ends_with(BLURB_PLACEHOLDER));
        assert!(
            blurb
                .trim_end_matches(BLURB_PLACEHOLDER)
                .split(' ')
                .all(|w| w == "word")
        );
    }

    #[test]
    fn test_sanitize_blurb_empty() {
        assert_eq!(sanitize_blurb(""), "");
        assert_eq!(sanitize_blurb("   "), "");
    }

    #[test]
    fn test_sanitize_category() {
        assert_eq!(sanitize_category("sql"), "SQL");
        assert_eq!(sanitize_category("getting_started"), "Getting Started");
        assert_eq!(sanitize_category("guide"), "Guide");
        assert_eq!(sanitize_category("API reference"), "Api Reference");
        assert_eq!(sanitize_category("SQL"), "Sql");
    }

    #[test]
    fn test_title_case_uses_titlecase_mapping() {
        assert_eq!(title_case("ßtraße"), "Sstraße");
        assert_eq!(title_case("ǆungla ǉ"), "ǅungla ǈ");
        assert_eq!(title_case("ǄUNGLA"), "ǅungla");
        assert_eq!(title_case("ﬁne"), "Fine");
        assert_eq!(title_case("ᾳ"), "ᾼ");
    }

    #[test]
    fn test_title_case_after_non_letters() {
        assert_eq!(title_case("api2go"), "Api2Go");
        assert_eq!(title_case("o'neil"), "O'Neil");
        assert_eq!(title_case(" posts"), " Posts");
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("日本go"), "日本Go");
    }
}
