//! Application settings

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rotary_dial::{parse_number, PhoneConfig};
use serde::{Deserialize, Serialize};

/// Numbers and pacing used by the scripted demonstration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoScript {
    /// Number dialed one digit at a time
    pub digit_by_digit: String,
    /// Number dialed in one go
    pub full_number: String,
    /// How long each scripted call stays up
    pub call_hold_ms: u64,
}

impl Default for DemoScript {
    fn default() -> Self {
        Self {
            digit_by_digit: "5551234".to_string(),
            full_number: "2125551234".to_string(),
            call_hold_ms: 2000,
        }
    }
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Phone timing and number rules
    pub phone: PhoneConfig,
    /// Prompt for a number at the end of the demo
    pub interactive: bool,
    /// Scripted demonstration
    pub demo: DemoScript,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            phone: PhoneConfig::default(),
            interactive: true,
            demo: DemoScript::default(),
        }
    }
}

impl Settings {
    /// Get the XDG config directory for rotary-phone
    /// Uses $XDG_CONFIG_HOME/rotary-phone on Linux/macOS, falls back to ~/.config/rotary-phone
    fn config_dir() -> Option<PathBuf> {
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_config);
            if path.is_absolute() {
                return Some(path.join("rotary-phone"));
            }
        }

        dirs::home_dir().map(|h| h.join(".config").join("rotary-phone"))
    }

    /// Get the default settings file path
    pub fn default_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.json"))
    }

    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json).context("Failed to parse settings")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that the demo script can be dialed with these phone rules
    ///
    /// Empty script numbers are allowed; the demo skips them.
    pub fn validate(&self) -> Result<()> {
        if !self.demo.digit_by_digit.is_empty() {
            parse_number(&self.demo.digit_by_digit)
                .context("Invalid demo.digit_by_digit")?;
        }
        if !self.demo.full_number.is_empty() {
            self.phone
                .rules
                .validate(&self.demo.full_number)
                .context("Invalid demo.full_number")?;
        }
        Ok(())
    }

    /// Load settings
    ///
    /// An explicit path must exist and parse. Without one, the default path is
    /// tried and defaults are used if it is missing or unreadable.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read settings from {}", path.display()))?;
                Self::from_json(&json)
                    .with_context(|| format!("Invalid settings file {}", path.display()))
            }
            None => {
                let loaded = Self::default_path()
                    .and_then(|path| std::fs::read_to_string(path).ok())
                    .and_then(|s| match Self::from_json(&s) {
                        Ok(settings) => Some(settings),
                        Err(e) => {
                            tracing::warn!("Ignoring saved settings: {:#}", e);
                            None
                        }
                    });
                Ok(loaded.unwrap_or_default())
            }
        }
    }

    /// Save settings to `path`, or the default path
    ///
    /// Returns the path written.
    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path().context("Could not determine settings path")?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .context("Failed to create settings directory")?;
            }
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;

        Ok(path)
    }
}
