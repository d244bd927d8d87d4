// SPDX-License-Identifier: MPL-2.0
//! Application configuration, loaded from and saved to a `settings.toml` file.
//!
//! The file lives under the platform config directory
//! (`<config_dir>/EmeraldStudio/settings.toml`) and holds the content API
//! endpoint, its credentials, and gallery preferences.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "EmeraldStudio";

/// Seconds between automatic slideshow advances.
pub const DEFAULT_SLIDESHOW_SECS: u64 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the content API (PostgREST-style key-value store).
    pub api_url: Option<String>,
    /// Public API key sent with every request.
    pub api_key: Option<String>,
    /// Access token of the signed-in user. Absent means signed out.
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub slideshow_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            api_key: None,
            access_token: None,
            slideshow_secs: Some(DEFAULT_SLIDESHOW_SECS),
        }
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

/// Loads from `dir/settings.toml` when a directory override is given,
/// otherwise from the default location.
pub fn load_with_dir(dir: Option<&Path>) -> Result<Config> {
    match dir {
        Some(dir) => {
            let path = dir.join(CONFIG_FILE);
            if path.exists() {
                load_from_path(&path)
            } else {
                Ok(Config::default())
            }
        }
        None => load(),
    }
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
            api_url: Some("https://example.supabase.co/rest/v1".to_string()),
            api_key: Some("anon-key".to_string()),
            access_token: Some("jwt".to_string()),
            slideshow_secs: Some(8),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.api_url, config.api_url);
        assert_eq!(loaded.api_key, config.api_key);
        assert_eq!(loaded.access_token, config.access_token);
        assert_eq!(loaded.slideshow_secs, config.slideshow_secs);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "this is { not toml").expect("failed to write file");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.api_url, None);
        assert_eq!(loaded.slideshow_secs, Some(DEFAULT_SLIDESHOW_SECS));
    }

    #[test]
    fn load_with_dir_missing_file_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let loaded = load_with_dir(Some(temp_dir.path())).expect("failed to load config");
        assert_eq!(loaded.api_url, None);
        assert_eq!(loaded.access_token, None);
    }

    #[test]
    fn load_with_dir_reads_override_location() {
        let config = Config {
            api_url: Some("http://localhost:54321/rest/v1".to_string()),
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        save_to_path(&config, &temp_dir.path().join(CONFIG_FILE)).expect("failed to save config");

        let loaded = load_with_dir(Some(temp_dir.path())).expect("failed to load config");
        assert_eq!(loaded.api_url, config.api_url);
    }
}
