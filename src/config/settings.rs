//! User settings for pointkeeper
//!
//! Controls how many actions may be configured, which key quits, and which
//! sections of the actions file hold tasks and rewards.

use serde::{Deserialize, Serialize};

use super::paths::PointsPaths;
use crate::error::PointsError;
use crate::models::KeyMap;

/// User settings for pointkeeper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Maximum number of actions across both sections
    #[serde(default = "default_max_actions")]
    pub max_actions: usize,

    /// Key that leaves the interactive screen
    #[serde(default = "default_quit_key")]
    pub quit_key: char,

    /// Section holding actions that earn points
    #[serde(default = "default_earn_section")]
    pub earn_section: String,

    /// Section holding actions that spend points
    #[serde(default = "default_spend_section")]
    pub spend_section: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_max_actions() -> usize {
    KeyMap::new(default_quit_key()).capacity()
}

fn default_quit_key() -> char {
    'q'
}

fn default_earn_section() -> String {
    "item".to_string()
}

fn default_spend_section() -> String {
    "store".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            max_actions: default_max_actions(),
            quit_key: default_quit_key(),
            earn_section: default_earn_section(),
            spend_section: default_spend_section(),
        }
    }
}

impl Settings {
    /// The key map these settings describe
    pub fn key_map(&self) -> KeyMap {
        KeyMap::new(self.quit_key)
    }

    /// Check the settings are usable
    pub fn validate(&self) -> Result<(), PointsError> {
        if !self.quit_key.is_ascii_alphabetic() {
            return Err(PointsError::Config(format!(
                "quit_key must be an ASCII letter, got {:?}",
                self.quit_key
            )));
        }

        let capacity = self.key_map().capacity();
        if self.max_actions == 0 || self.max_actions > capacity {
            return Err(PointsError::Config(format!(
                "max_actions must be between 1 and {}, got {}",
                capacity, self.max_actions
            )));
        }

        if self.earn_section.is_empty() || self.spend_section.is_empty() {
            return Err(PointsError::Config("section names cannot be empty".into()));
        }

        Ok(())
    }

    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &PointsPaths) -> Result<Self, PointsError> {
        let settings_path = paths.settings_file();

        let settings = if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| PointsError::Io(format!("Failed to read settings file: {}", e)))?;

            serde_json::from_str::<Settings>(&contents).map_err(|e| {
                PointsError::Config(format!("Failed to parse settings file: {}", e))
            })?
        } else {
            // Don't save yet - let caller decide when to persist
            Settings::default()
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PointsPaths) -> Result<(), PointsError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PointsError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PointsError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
