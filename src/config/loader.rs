//! Configuration file discovery and loading.
//!
//! The well-known config file name is searched upward from the working
//! directory to the filesystem root; the first match wins. An absent file
//! is not an error (defaults apply), but an explicitly requested file
//! that is missing or malformed is fatal before any validator runs.

use std::path::{Path, PathBuf};

use crate::config::effective::EffectiveConfig;
use crate::config::inheritance::{GemLocator, InheritanceResolver, SystemGemLocator};
use crate::error::{DoclintError, Result};

/// Well-known configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = ".doclint.yml";

/// Loads effective configurations from documents on disk.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a specific config file, resolving its inheritance chain.
    pub fn from_file(path: &Path) -> Result<EffectiveConfig> {
        Self::from_file_with_locator(path, &SystemGemLocator)
    }

    /// Same as [`Self::from_file`] with an injected gem locator.
    pub fn from_file_with_locator(
        path: &Path,
        locator: &dyn GemLocator,
    ) -> Result<EffectiveConfig> {
        if !path.exists() {
            return Err(DoclintError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let merged = InheritanceResolver::new(locator).resolve_file(path)?;
        Ok(EffectiveConfig::new(merged))
    }

    /// Search upward from `start` and load the first config file found.
    ///
    /// Returns `Ok(None)` when no file exists anywhere up the tree.
    pub fn discover(start: &Path) -> Result<Option<EffectiveConfig>> {
        match Self::find_config_file(start) {
            Some(path) => Self::from_file(&path).map(Some),
            None => Ok(None),
        }
    }

    /// Find the nearest config file at or above `start`.
    pub fn find_config_file(start: &Path) -> Option<PathBuf> {
        let start = std::fs::canonicalize(start).unwrap_or_else(|_| start.to_path_buf());
        let mut current: Option<&Path> = Some(&start);

        while let Some(dir) = current {
            let candidate = dir.join(DEFAULT_CONFIG_FILE);
            if candidate.is_file() {
                return Some(candidate);
            }
            current = dir.parent();
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn from_file_on_missing_path_is_config_not_found() {
        let err = ConfigLoader::from_file(Path::new("/no/such/.doclint.yml")).unwrap_err();
        assert!(matches!(err, DoclintError::ConfigNotFound { .. }));
    }

    #[test]
    fn from_file_loads_and_projects() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "Tags/Order:\n  Enabled: false\n").unwrap();

        let config = ConfigLoader::from_file(&path).unwrap();
        assert!(!config.validator_enabled("Tags/Order"));
    }

    #[test]
    fn find_config_file_walks_upward() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "").unwrap();
        let nested = dir.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();

        let found = ConfigLoader::find_config_file(&nested).unwrap();
        assert_eq!(
            found,
            fs::canonicalize(dir.path()).unwrap().join(DEFAULT_CONFIG_FILE)
        );
    }

    #[test]
    fn nearest_config_file_wins() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "Outer: 1\n").unwrap();
        let nested = dir.path().join("inner");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join(DEFAULT_CONFIG_FILE), "Inner: 1\n").unwrap();

        let found = ConfigLoader::find_config_file(&nested).unwrap();
        assert!(found.starts_with(fs::canonicalize(&nested).unwrap()));
    }

    #[test]
    fn discover_returns_none_without_a_config() {
        let dir = TempDir::new().unwrap();
        // A bare temp dir has no config anywhere up to / in practice, but
        // guard against one in the environment by nesting deep.
        let nested = dir.path().join("x/y");
        fs::create_dir_all(&nested).unwrap();

        if ConfigLoader::find_config_file(&nested).is_none() {
            assert!(ConfigLoader::discover(&nested).unwrap().is_none());
        }
    }
}
