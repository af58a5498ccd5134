//! Configuration loading for the jangsik app.
//!
//! Reads `config.toml` from the platform config directory. Every field is
//! optional; a missing or invalid file falls back to defaults with a logged
//! warning, never an error.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use jangsik_core::{MotionPreference, Theme};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of graphic type identifiers the factory draws from.
    pub type_count: usize,
    /// Target frame rate for the host loop.
    pub frame_rate_hz: u64,
    /// Capacity of the graphic collection; the oldest graphic is evicted
    /// when a new one is generated past this count.
    pub max_graphics: usize,
    /// Rendering theme.
    pub theme: Theme,
    /// Motion preference.
    pub motion: MotionPreference,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            type_count: 17,
            frame_rate_hz: 30,
            max_graphics: 64,
            theme: Theme::Dark,
            motion: MotionPreference::Full,
        }
    }
}

impl Config {
    /// Load configuration from the platform config directory.
    ///
    /// Missing file is normal and silent; an unreadable or unparsable file
    /// is logged and replaced with defaults.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            log::warn!("no config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(raw) => Self::parse(&raw),
            Err(err) => {
                log::warn!("failed to read {}: {err}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Parse a TOML document, falling back to defaults on error.
    pub fn parse(raw: &str) -> Self {
        match toml::from_str(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("invalid config: {err}, using defaults");
                Self::default()
            }
        }
    }

    /// Path of the config file, if a config directory exists.
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "jangsik").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
