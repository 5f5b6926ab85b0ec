//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/docs/stable/  ← cwd
/// /home/user/site/docdex.toml   ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Walk up from `start` looking for `config_name`.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_ancestor() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("docs/stable/guide");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("docdex.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("docdex.toml")).unwrap();
        assert_eq!(found, dir.path().join("docdex.toml"));
    }

    #[test]
    fn test_find_config_prefers_nearest() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("site");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("docdex.toml"), "").unwrap();
        fs::write(nested.join("docdex.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("docdex.toml")).unwrap();
        assert_eq!(found, nested.join("docdex.toml"));
    }

    #[test]
    fn test_find_config_absolute_missing() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(find_config_file_from(dir.path(), &missing).is_none());
    }

    #[test]
    fn test_directory_is_not_a_config() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a");
        fs::create_dir_all(nested.join("docdex.toml")).unwrap();
        fs::write(dir.path().join("docdex.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("docdex.toml")).unwrap();
        assert_eq!(found, dir.path().join("docdex.toml"));
    }
}
