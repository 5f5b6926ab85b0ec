//! Site configuration management for `docdex.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/   # [index] and [archive] definitions
//! ├── error      # ConfigError, ConfigDiagnostics
//! ├── util       # config file lookup
//! └── mod.rs     # SiteConfig (this file)
//! ```
//!
//! The config file is optional. Without one, the current directory is the
//! site root and every section uses its defaults.

mod error;
pub mod section;
mod util;

use util::find_config_file;

pub use error::{ConfigDiagnostics, ConfigError};
pub use section::{ArchiveConfig, ContentRoot, IndexConfig};

use crate::{cli::Cli, debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file name looked up when `--config` is not given.
pub const DEFAULT_CONFIG_NAME: &str = "docdex.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing docdex.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file, empty if none was found (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site root directory - parent of config file or cwd (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Search index settings
    #[serde(default)]
    pub index: IndexConfig,

    /// Docs archive settings
    #[serde(default)]
    pub archive: ArchiveConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. The site root is the
    /// config file's parent directory, or cwd when no config file exists.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config) {
            Some(path) => Self::from_path(&path)?,
            None if cli.config != Path::new(DEFAULT_CONFIG_NAME) => {
                return Err(ConfigError::Io(
                    cli.config.clone(),
                    std::io::Error::from(std::io::ErrorKind::NotFound),
                )
                .into());
            }
            None => Self::with_root(&cwd),
        };

        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Default configuration rooted at `root`.
    pub fn with_root(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            ..Self::default()
        }
    }

    /// Load configuration from file path with unknown field detection.
    ///
    /// The site root is the file's parent directory.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        config.config_path = path.to_path_buf();
        debug!("config"; "loaded {}", config.config_path.display());

        if !ignored.is_empty() {
            config.print_unknown_fields_warning(&ignored);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields in the loaded config file.
    fn print_unknown_fields_warning(&self, fields: &[String]) {
        let path = &self.config_path;
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Apply CLI overrides.
    fn apply_cli(&mut self, cli: &Cli) {
        crate::logger::set_verbose(cli.verbose);

        if let Some(output) = &cli.output {
            self.index.output = output.clone();
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Absolute path of the index output file.
    pub fn output_path(&self) -> PathBuf {
        self.root_join(&self.index.output)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.index.validate(&mut diag);
        self.archive.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use tempfile::TempDir;

    #[test]
    fn test_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        assert!(SiteConfig::parse_with_ignored("[index\noutput = \"x.json\"").is_err());
    }

    #[test]
    fn test_from_path_sets_root_and_config_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_NAME);
        fs::write(&path, "[index]\noutput = \"out.json\"\ntypo = 1\n").unwrap();

        let config = SiteConfig::from_path(&path).unwrap();
        assert_eq!(config.config_path, path);
        assert_eq!(config.get_root(), dir.path());
        assert_eq!(config.output_path(), dir.path().join("out.json"));
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_NAME);
        let err = SiteConfig::from_path(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Io(p, _)) if *p == path
        ));
    }

    #[test]
    fn test_get_root_default() {
        let config = SiteConfig::default();
        assert_eq!(config.get_root(), Path::new(""));
    }

    #[test]
    fn test_root_helpers() {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/site"));
        assert_eq!(config.root_join("docs"), PathBuf::from("/site/docs"));
        assert_eq!(
            config.output_path(),
            PathBuf::from("/site/data/search_data.json")
        );
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[index]\noutput = \"a.json\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.index.output, PathBuf::from("a.json"));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let (_, ignored) = SiteConfig::parse_with_ignored("[archive]\ndocs = \"d\"").unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_cli_output_override() {
        let cli = Cli::try_parse_from(["docdex", "--output", "public/search.json"]).unwrap();
        let mut config = SiteConfig::with_root(Path::new("/site"));
        config.apply_cli(&cli);
        assert_eq!(
            config.output_path(),
            PathBuf::from("/site/public/search.json")
        );
    }

    #[test]
    fn test_validate_reports_diagnostics() {
        let config = test_parse_config("[index]\nroots = []");
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Diagnostics(_))
        ));
        assert!(SiteConfig::default().validate().is_ok());
    }
}
