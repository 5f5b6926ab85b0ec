//! Command-line interface module.

pub mod archive;
mod args;
pub mod build;

pub use args::{Cli, Commands};
