//! User configuration management.
//!
//! Preferences are stored as pretty JSON under the platform config
//! directory; a missing or unreadable file silently falls back to defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User preferences persisted between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    /// Master volume applied to the pad, 0.0-1.0.
    #[serde(default = "default_volume")]
    pub master_volume: f32,

    /// Show the digital display as 24-hour instead of 12-hour + AM/PM.
    #[serde(default)]
    pub twenty_four_hour: bool,

    // === Window Geometry ===
    /// Window width in points.
    #[serde(default)]
    pub window_width: Option<f32>,
    /// Window height in points.
    #[serde(default)]
    pub window_height: Option<f32>,
}

fn default_volume() -> f32 {
    1.0
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            master_volume: 1.0,
            twenty_four_hour: false,
            window_width: None,
            window_height: None,
        }
    }
}

impl UserConfig {
    /// Get the config file path.
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("chime");
            p.push("config.json");
            p
        })
    }

    /// Load configuration from disk.
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| {
                if path.exists() {
                    fs::read_to_string(&path).ok()
                } else {
                    None
                }
            })
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save configuration to disk.
    pub fn save(&self) -> Result<(), std::io::Error> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }
}
