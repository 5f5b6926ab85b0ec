//! Markdown processing for content files.
//!
//! - [`frontmatter`]: `---` delimited header parsing
//! - [`convert`]: pulldown-cmark events to an owned [`tree::Node`] tree
//! - [`extract`]: plain-text flattening of a node tree

mod convert;
mod extract;
mod frontmatter;
pub mod tree;

pub use convert::parse;
pub use extract::extract_text;
pub use frontmatter::{FrontMatter, FrontMatterError};
