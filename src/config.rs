//! User preferences
//!
//! The small TOML record the desktop shell keeps between sessions: window
//! geometry and where the data file lives. Every field has a default, so a
//! missing or partial file never blocks startup.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error while reading or writing the preferences file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid preferences file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("could not serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Main window geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuiSettings {
    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,

    /// Last window position; `None` lets the window manager decide
    #[serde(default)]
    pub x: Option<i32>,

    #[serde(default)]
    pub y: Option<i32>,
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            x: None,
            y: None,
        }
    }
}

fn default_width() -> u32 {
    740
}

fn default_height() -> u32 {
    600
}

/// User preferences persisted across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub gui: GuiSettings,

    /// Path of the roster data file, relative to the app's data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            gui: GuiSettings::default(),
            data_file: default_data_file(),
        }
    }
}

fn default_data_file() -> String {
    "data/tutordesk.json".to_string()
}

impl Preferences {
    /// Load preferences from a TOML file. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save preferences as TOML
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
