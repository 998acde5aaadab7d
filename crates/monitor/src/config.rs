//! Persisted dashboard configuration
//!
//! A single JSON object at a fixed per-user path. Read failures fall
//! back to the defaults silently; the dashboard must come up even with a
//! missing or mangled file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Show only devices in firmware-update mode
    #[serde(rename = "filterDFU", default)]
    pub filter_dfu: bool,
}

impl Config {
    /// Load configuration from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!("Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Load configuration or fall back to defaults.
    ///
    /// A missing or malformed file is not an error for a display tool;
    /// it just means stock settings.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                debug!("Config: {:#}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save configuration to `path`, creating the parent directory on
    /// first write.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize configuration")?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        debug!("Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Default per-user configuration file path.
    pub fn default_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("usbtop").join("config.json")
        } else {
            PathBuf::from(".config/usbtop/config.json")
        }
    }
}
