//! Line-level editing of markdown pages being archived.
//!
//! Only the `redirect_from` entry of the front matter and `{% link %}` tags
//! in the body are touched; every other header line is kept verbatim.

const DELIMITER: &str = "---";
const REDIRECT_KEY: &str = "redirect_from";

/// A markdown page split into optional front-matter lines and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    header: Option<Vec<String>>,
    body: String,
}

impl Page {
    /// Split `content` at a leading `---` header.
    ///
    /// Content without a leading delimiter line, or without a closing one,
    /// is all body.
    pub fn parse(content: &str) -> Self {
        if let Some(rest) = strip_delimiter_line(content) {
            let mut offset = 0;
            for line in rest.split_inclusive('\n') {
                if line.trim_end() == DELIMITER {
                    return Self {
                        header: Some(rest[..offset].lines().map(str::to_owned).collect()),
                        body: rest[offset + line.len()..].to_string(),
                    };
                }
                offset += line.len();
            }
        }

        Self {
            header: None,
            body: content.to_string(),
        }
    }

    /// The `redirect_from` entry with its continuation lines.
    pub fn redirect_from(&self) -> Option<Vec<String>> {
        let header = self.header.as_ref()?;
        let range = redirect_range(header)?;
        Some(header[range].to_vec())
    }

    /// Replace the `redirect_from` entry, or remove it when `block` is `None`.
    ///
    /// A new entry is appended to the end of the header. Pages without a
    /// header are left alone.
    pub fn set_redirect_from(&mut self, block: Option<Vec<String>>) {
        let Some(header) = &mut self.header else {
            return;
        };

        match (redirect_range(header), block) {
            (Some(range), Some(block)) => {
                header.splice(range, block);
            }
            (Some(range), None) => {
                header.drain(range);
            }
            (None, Some(block)) => header.extend(block),
            (None, None) => {}
        }
    }

    /// Rewrite `{% link <from>` tags in the body to `{% link <to>`.
    pub fn retarget_links(&mut self, from: &str, to: &str) {
        let from = format!("{{% link {from}");
        if self.body.contains(&from) {
            self.body = self.body.replace(&from, &format!("{{% link {to}"));
        }
    }

    /// Serialize back to text ending in exactly one newline.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.body.len() + 256);
        if let Some(header) = &self.header {
            out.push_str(DELIMITER);
            out.push('\n');
            for line in header {
                out.push_str(line);
                out.push('\n');
            }
            out.push_str(DELIMITER);
            out.push('\n');
        }
        out.push_str(self.body.trim_end());
        out.push('\n');
        out
    }
}

fn strip_delimiter_line(content: &str) -> Option<&str> {
    let (first, rest) = content.split_once('\n')?;
    (first.trim_end() == DELIMITER).then_some(rest)
}

/// Line range of the `redirect_from` key and its indented or `- ` items.
fn redirect_range(header: &[String]) -> Option<std::ops::Range<usize>> {
    let start = header.iter().position(|line| is_redirect_key(line))?;
    let items = header[start + 1..]
        .iter()
        .take_while(|line| line.starts_with([' ', '\t', '-']))
        .count();
    Some(start..start + 1 + items)
}

fn is_redirect_key(line: &str) -> bool {
    line.strip_prefix(REDIRECT_KEY)
        .is_some_and(|rest| rest.trim_start().starts_with(':'))
}
