//! Width-limited shortening at word boundaries.

use super::normalize_whitespace;

/// Collapse whitespace and truncate `text` to at most `width` characters.
///
/// Text that fits is returned collapsed but otherwise untouched. Longer text
/// keeps the longest run of whole word chunks that still leaves room for
/// `placeholder`, which is appended directly (`"some words..."`). When not
/// even the first chunk fits, the result is the placeholder alone.
///
/// Chunks are split at spaces, right after the hyphen of a hyphenated word
/// (`well-known` → `well-`, `known`), and around a `--` dash run between
/// words (`beta--gamma` → `beta`, `--`, `gamma`).
pub fn shorten(text: &str, width: usize, placeholder: &str) -> String {
    let text = normalize_whitespace(text);
    if text.chars().count() <= width {
        return text;
    }

    let budget = width.saturating_sub(placeholder.chars().count());
    let mut kept = 0;
    let mut len = 0;
    for chunk in chunks(&text) {
        len += text[chunk.clone()].chars().count();
        if len > budget {
            break;
        }
        if !text[chunk.clone()].trim().is_empty() {
            kept = chunk.end;
        }
    }

    if kept == 0 {
        return placeholder.trim_start().to_string();
    }
    format!("{}{}", &text[..kept], placeholder)
}

/// Split collapsed text into byte ranges of words, spaces, dash runs and
/// hyphenated word parts.
fn chunks(text: &str) -> Vec<std::ops::Range<usize>> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut out = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while let Some(&(offset, c)) = chars.get(i) {
        let end = offset + c.len_utf8();
        if c == ' ' {
            if start < offset {
                out.push(start..offset);
            }
            out.push(offset..end);
            start = end;
        } else if let Some(next) = dash_run_end(&chars, i) {
            if start < offset {
                out.push(start..offset);
            }
            let stop = chars[next].0;
            out.push(offset..stop);
            start = stop;
            i = next;
            continue;
        } else if c == '-' && is_hyphen_break(&chars, i) {
            out.push(start..end);
            start = end;
        }
        i += 1;
    }
    if start < text.len() {
        out.push(start..text.len());
    }
    out
}

/// Index just past a run of two or more hyphens starting at `i`, when the
/// run sits between a word (or closing punctuation) and a word character.
fn dash_run_end(chars: &[(usize, char)], i: usize) -> Option<usize> {
    let at = |j: usize| chars.get(j).map(|&(_, c)| c);
    if at(i) != Some('-') || i == 0 || !at(i - 1).is_some_and(is_dash_lead) {
        return None;
    }

    let mut j = i;
    while at(j) == Some('-') {
        j += 1;
    }
    (j - i >= 2 && at(j).is_some_and(is_word_char)).then_some(j)
}

/// A hyphen breaks a word when two letters (or `letter-letter`) precede it
/// and a letter pair (optionally hyphen-joined) follows it.
fn is_hyphen_break(chars: &[(usize, char)], i: usize) -> bool {
    let at = |j: usize| chars.get(j).map(|&(_, c)| c);
    let letter = |j: usize| at(j).is_some_and(is_letter);

    let before = (i >= 2 && letter(i - 2) && letter(i - 1))
        || (i >= 3 && letter(i - 3) && at(i - 2) == Some('-') && letter(i - 1));
    let after = letter(i + 1) && (letter(i + 2) || (at(i + 2) == Some('-') && letter(i + 3)));

    before && after
}

#[inline]
fn is_letter(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[inline]
fn is_dash_lead(c: char) -> bool {
    is_word_char(c) || matches!(c, '!' | '"' | '\'' | '&' | '.' | ',' | '?')
}
