//! Path management for pointkeeper
//!
//! Provides XDG-compliant path resolution for the actions file, the balance
//! file, settings and the log.
//!
//! ## Path Resolution Order
//!
//! 1. `POINTKEEPER_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/pointkeeper` or `~/.config/pointkeeper`
//! 3. Windows: `%APPDATA%\pointkeeper`
//!
//! The actions and balance files can additionally be pointed elsewhere.

use std::path::{Path, PathBuf};

use crate::error::PointsError;

/// Manages all paths used by pointkeeper
#[derive(Debug, Clone)]
pub struct PointsPaths {
    /// Base directory for all pointkeeper files
    base_dir: PathBuf,
    /// Explicit actions file, if overridden
    actions_override: Option<PathBuf>,
    /// Explicit balance file, if overridden
    balance_override: Option<PathBuf>,
}

impl PointsPaths {
    /// Create a new PointsPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no base directory can be determined.
    pub fn new() -> Result<Self, PointsError> {
        let base_dir = if let Ok(custom) = std::env::var("POINTKEEPER_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self::with_base_dir(base_dir))
    }

    /// Create PointsPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            actions_override: None,
            balance_override: None,
        }
    }

    /// Read actions from `path` instead of the base directory
    pub fn with_actions_file(mut self, path: Option<PathBuf>) -> Self {
        self.actions_override = path;
        self
    }

    /// Keep the balance in `path` instead of the base directory
    pub fn with_balance_file(mut self, path: Option<PathBuf>) -> Self {
        self.balance_override = path;
        self
    }

    /// Get the base directory (~/.config/pointkeeper/ or equivalent)
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the actions file
    pub fn actions_file(&self) -> PathBuf {
        self.actions_override
            .clone()
            .unwrap_or_else(|| self.base_dir.join("items.ini"))
    }

    /// Get the path to the balance file
    pub fn balance_file(&self) -> PathBuf {
        self.balance_override
            .clone()
            .unwrap_or_else(|| self.base_dir.join("score.txt"))
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("pointkeeper.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), PointsError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PointsError::Io(format!("Failed to create base directory: {}", e)))
    }
}

/// Resolve the default base directory based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, PointsError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                PointsError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("pointkeeper"))
}

/// Resolve the default base directory based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, PointsError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| PointsError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("pointkeeper"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PointsPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.actions_file(), temp_dir.path().join("items.ini"));
        assert_eq!(paths.balance_file(), temp_dir.path().join("score.txt"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_file_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let actions = temp_dir.path().join("elsewhere").join("tasks.ini");
        let paths = PointsPaths::with_base_dir(temp_dir.path().to_path_buf())
            .with_actions_file(Some(actions.clone()))
            .with_balance_file(None);

        assert_eq!(paths.actions_file(), actions);
        assert_eq!(paths.balance_file(), temp_dir.path().join("score.txt"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("pointkeeper");
        let paths = PointsPaths::with_base_dir(base.clone());

        paths.ensure_directories().unwrap();
        assert!(base.exists());
    }
}
