// SPDX-License-Identifier: MPL-2.0
//! User configuration, loaded from and saved to a `settings.toml` file.
//!
//! All fields are optional in the file; missing or unparsable content
//! falls back to the defaults in [`defaults`].

mod defaults;

pub use defaults::{
    DEFAULT_ALLOWS_TRIMMING, DEFAULT_HANDOFF_DELAY_MS, DEFAULT_MAX_CLIP_SECS,
    DEFAULT_PICKER_QUALITY,
};

use crate::application::port::PickRequest;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ClipLens";

#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Maximum clip duration accepted by the picker, in seconds.
    #[serde(default)]
    pub max_clip_secs: Option<u32>,
    /// Delay before the hand-off navigation, in milliseconds.
    #[serde(default)]
    pub handoff_delay_ms: Option<u64>,
    /// Requested picker quality, `0.0..=1.0`.
    #[serde(default)]
    pub picker_quality: Option<f32>,
    /// Whether the picker offers an editing/trim step.
    #[serde(default)]
    pub allows_trimming: Option<bool>,
}

impl Config {
    /// Picker constraints derived from this config.
    #[must_use]
    pub fn pick_request(&self) -> PickRequest {
        PickRequest {
            allows_trimming: self.allows_trimming.unwrap_or(DEFAULT_ALLOWS_TRIMMING),
            quality: self.picker_quality.unwrap_or(DEFAULT_PICKER_QUALITY),
            max_duration_secs: self.max_clip_secs.unwrap_or(DEFAULT_MAX_CLIP_SECS),
        }
    }

    /// The fixed hand-off delay derived from this config.
    #[must_use]
    pub fn handoff_delay(&self) -> Duration {
        Duration::from_millis(self.handoff_delay_ms.unwrap_or(DEFAULT_HANDOFF_DELAY_MS))
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let config = Config {
            max_clip_secs: Some(15),
            handoff_delay_ms: Some(250),
            picker_quality: Some(0.8),
            allows_trimming: Some(false),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "max_clip_secs = \"not a number\"")
            .expect("failed to write file");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn default_pick_request_matches_constants() {
        let request = Config::default().pick_request();
        assert_eq!(request.max_duration_secs, DEFAULT_MAX_CLIP_SECS);
        assert_eq!(request.quality, DEFAULT_PICKER_QUALITY);
        assert_eq!(request.allows_trimming, DEFAULT_ALLOWS_TRIMMING);
    }

    #[test]
    fn configured_handoff_delay_is_used() {
        let config = Config {
            handoff_delay_ms: Some(100),
            ..Config::default()
        };
        assert_eq!(config.handoff_delay(), Duration::from_millis(100));
    }
}
