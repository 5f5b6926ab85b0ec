//! Core types - pure abstractions shared across the codebase.

mod content;

pub use content::{ContentType, is_markdown};
