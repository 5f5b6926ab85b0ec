//! Configuration section definitions.
//!
//! Each module corresponds to a section in `docdex.toml`:
//!
//! | Module    | TOML Section | Purpose                              |
//! |-----------|--------------|--------------------------------------|
//! | `index`   | `[index]`    | Content roots and index output path  |
//! | `archive` | `[archive]`  | Directories used by `docdex archive` |

mod archive;
mod index;

pub use archive::ArchiveConfig;
pub use index::{ContentRoot, IndexConfig};
