//! TOML-based CLI configuration.
//!
//! Stores default flag values applied when a command omits them.
//! Configuration is stored at `~/.config/aulaplan/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default weekday selection, e.g. "mon,wed,fri".
    #[serde(default)]
    pub default_days: Option<String>,
    /// Default weekday window, e.g. "18:00-20:00".
    #[serde(default)]
    pub default_window: Option<String>,
    /// Default Saturday window, e.g. "09:00-12:00".
    #[serde(default)]
    pub default_saturday_window: Option<String>,
}

impl Config {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("aulaplan").join("config.toml"))
    }

    /// Load from disk, falling back to defaults on any failure.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(raw) => toml::from_str(&raw).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let path = Self::config_path().ok_or("no config directory available")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}
