// SPDX-License-Identifier: MPL-2.0
//! Playback configuration, including loading and saving settings to a
//! `playback.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use cutscene::config;
//!
//! // Load existing configuration (defaults if none is saved)
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.frame_rate = 60;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

mod defaults;

pub use defaults::{
    DEFAULT_FRAME_RATE, DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH, DEFAULT_VOLUME,
    MAX_FRAME_RATE, MAX_VOLUME, MIN_FRAME_RATE, MIN_VOLUME,
};

use crate::domain::volume::Volume;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "playback.toml";
const APP_NAME: &str = "cutscene";

/// Playback settings supplied by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Target surface width in pixels.
    pub surface_width: u32,
    /// Target surface height in pixels.
    pub surface_height: u32,
    /// Display frame rate used by pacing pumps.
    pub frame_rate: u32,
    /// Default cutscene volume (0.0–1.0); clamped on use.
    pub volume: f32,
    /// Explicit path to the native decoder library, if not on the loader path.
    pub library_path: Option<PathBuf>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            surface_width: DEFAULT_SURFACE_WIDTH,
            surface_height: DEFAULT_SURFACE_HEIGHT,
            frame_rate: DEFAULT_FRAME_RATE,
            volume: DEFAULT_VOLUME,
            library_path: None,
        }
    }
}

impl PlaybackConfig {
    /// The configured default volume as a clamped domain value.
    #[must_use]
    pub fn default_volume(&self) -> Volume {
        Volume::new(self.volume)
    }

    /// The configured frame rate, clamped to the supported range.
    #[must_use]
    pub fn effective_frame_rate(&self) -> u32 {
        self.frame_rate.clamp(MIN_FRAME_RATE, MAX_FRAME_RATE)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<PlaybackConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(PlaybackConfig::default())
}

pub fn save(config: &PlaybackConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<PlaybackConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &PlaybackConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
