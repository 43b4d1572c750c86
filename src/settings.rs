//! Controller settings with persistence
//!
//! Settings are saved to `~/.config/vantage/settings.toml`

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use vantage_core::TimeConfig;
use vantage_game::{LocomotionConfig, LookConfig};

/// All controller settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ControllerSettings {
    pub look: LookConfig,
    pub locomotion: LocomotionConfig,
    pub time: TimeConfig,
}

impl ControllerSettings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vantage"))
    }

    /// Get the settings file path
    fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            warn!("Could not determine config directory");
            return Self::default();
        };

        if !path.exists() {
            info!("No settings file found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse settings: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read settings file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> std::io::Result<()> {
        let Some(dir) = Self::config_dir() else {
            warn!("Could not determine config directory, settings not saved");
            return Ok(());
        };
        fs::create_dir_all(&dir)?;

        let path = dir.join("settings.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(&path, content)?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }
}
