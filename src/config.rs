use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display text of each dropdown option, in order
    pub options: Vec<String>,
    pub placeholder: String,
    pub submit: SubmitConfig,
    pub window: WindowConfig,
}

/// What pressing Enter does with the typed value
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubmitPolicy {
    /// Replace the current history location with `search?query=<value>` and clear the input
    History,
    /// Log `/search?query=<value>` and the raw value, leave the input alone
    Log,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SubmitConfig {
    pub policy: SubmitPolicy,
    /// Location the history starts at (history policy only)
    pub initial_location: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    /// Radius of the rounded input corners
    pub corner_radius: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            options: ["Electronics", "Books", "Clothing", "Home", "Sports"]
                .into_iter()
                .map(String::from)
                .collect(),
            placeholder: "Search...".to_string(),
            submit: SubmitConfig::default(),
            window: WindowConfig::default(),
        }
    }
}

impl Default for SubmitPolicy {
    fn default() -> Self {
        Self::History
    }
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            policy: SubmitPolicy::default(),
            initial_location: "/".to_string(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 420.0,
            corner_radius: 24.0,
        }
    }
}

pub fn load() -> Config {
    match config_path() {
        Some(path) => load_from(&path),
        None => {
            tracing::warn!("Could not determine home directory, using defaults");
            Config::default()
        }
    }
}

pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!("Failed to parse config: {}, using defaults", e);
                Config::default()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read config file: {}, using defaults", e);
            Config::default()
        }
    }
}

fn config_path() -> Option<PathBuf> {
    // ~/.config/ on every platform, not ~/Library/Application Support/
    Some(
        dirs::home_dir()?
            .join(".config")
            .join("searchdrop")
            .join("config.toml"),
    )
}
