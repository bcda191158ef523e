use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::warn;

use crate::app::domain::document::LoadOrdering;
use crate::app::infrastructure::error::AppError;

/// Directory name used under the platform config dir.
pub const APP_DIR_NAME: &str = "md-viewer";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerSettings {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub load_ordering: LoadOrdering,

    /// How often the platform color scheme is re-read.
    #[serde(default = "default_system_theme_poll_secs")]
    pub system_theme_poll_secs: u64,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_system_theme_poll_secs() -> u64 {
    3
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            load_ordering: LoadOrdering::default(),
            system_theme_poll_secs: default_system_theme_poll_secs(),
        }
    }
}

impl ViewerSettings {
    pub fn system_theme_poll_interval(&self) -> Duration {
        Duration::from_secs(self.system_theme_poll_secs.max(1))
    }

    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(config_path: &Path) -> Self {
        match fs::read_to_string(config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!(path = %config_path.display(), "Failed to parse settings: {e}. Using defaults.");
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::default();
                if let Err(e) = default.save_to(config_path) {
                    warn!(path = %config_path.display(), "Could not write default settings: {e}");
                }
                default
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), AppError> {
        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(config_path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        config_dir().join("settings.json")
    }
}

/// Per-user config directory of the viewer.
pub fn config_dir() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR_NAME);
    path
}
