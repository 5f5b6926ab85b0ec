//! Docdex - search index generator for a static docs and blog site.

#![allow(dead_code)]

mod cli;
mod config;
mod core;
mod index;
mod logger;
mod markdown;
mod text;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, archive::archive_docs, build::build_index};
use config::SiteConfig;

fn main() {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    if let Err(err) = run(&cli) {
        log!("error"; "{:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = SiteConfig::load(cli)?;

    match cli.command() {
        Commands::Build => build_index(&config).map(|_| ()),
        Commands::Archive { version } => archive_docs(&config, &version),
    }
}
