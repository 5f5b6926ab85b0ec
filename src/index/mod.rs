//! Search index generation.
//!
//! # Pipeline
//!
//! ```text
//! walker ──► document ──► record ──► writer
//!   │           │
//!   │           ├── markdown (front matter, node tree, text)
//!   │           ├── text (sanitizers)
//!   │           └── url
//!   └── jwalk (serial, sorted)
//! ```

mod document;
mod error;
mod record;
mod url;
mod walker;
mod writer;

use record::SearchIndex;

pub use error::IndexError;
pub use record::DocumentRecord;
pub use walker::index_root;
pub use writer::write_index;
