//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Docdex search index generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Index output path (relative to site root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Config file path (default: docdex.toml)
    #[arg(short = 'C', long, global = true, default_value = "docdex.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// subcommands (default: build)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build the search index
    #[command(visible_alias = "b")]
    Build,

    /// Archive the stable docs under VERSION and promote the preview docs
    #[command(visible_alias = "a")]
    Archive {
        /// Version name of the current stable docs (e.g. 1.2.0)
        version: String,
    },
}

impl Cli {
    /// Resolved command; running without a subcommand builds the index.
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Build)
    }
}
