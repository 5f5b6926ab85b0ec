//! Search index serialization.
//!
//! # Output Format
//!
//! ```json
//! {
//! 	"data": [
//! 		{
//! 			"title": "Hello",
//! 			"text": "some text here",
//! 			"category": "Guide",
//! 			"url": "/docs/stable/guide/hello",
//! 			"blurb": "H Some text here.",
//! 			"type": "documentation"
//! 		}
//! 	]
//! }
//! ```

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::Path;

use super::{DocumentRecord, IndexError, SearchIndex};
use crate::log;

const INDENT: &[u8] = b"\t";

/// Sort `records` by title and write the index to `path`.
pub fn write_index(records: &mut [DocumentRecord], path: &Path) -> Result<(), IndexError> {
    sort_records(records);
    let json = render_index(records)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| IndexError::Write(parent.to_path_buf(), err))?;
    }
    fs::write(path, json).map_err(|err| IndexError::Write(path.to_path_buf(), err))?;

    log!("index"; "Search index file '{}' was generated successfully", path.display());
    Ok(())
}

/// Stable sort by title, in code point order.
pub fn sort_records(records: &mut [DocumentRecord]) {
    records.sort_by(|a, b| a.title.cmp(&b.title));
}

/// Tab-indented JSON without a trailing newline.
fn render_index(records: &[DocumentRecord]) -> Result<Vec<u8>, IndexError> {
    let mut buf = Vec::with_capacity(records.len() * 512);
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    SearchIndex { data: records }.serialize(&mut ser)?;
    Ok(buf)
}
