use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Host settings read from `~/.recipes-tui/config.json`
///
/// Every field is optional in the file. The app only reads this file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Event poll timeout in milliseconds
    pub tick_rate_ms: u64,
    /// Capture the mouse for clicks, wheel scrolling and hover
    pub mouse: bool,
    /// Highlight the menu toggle while the pointer is over it
    pub hover_highlight: bool,
    /// How long a press must be held to count as a long press
    pub long_press_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            mouse: true,
            hover_highlight: true,
            long_press_ms: 500,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".recipes-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the config file, if there is a readable one
    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!("Could not read {}: {}", config_path.display(), e);
                return None;
            }
        };
        match Self::parse(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!("Ignoring malformed {}: {}", config_path.display(), e);
                None
            }
        }
    }

    /// Load the config file, falling back to defaults
    pub fn load_or_default() -> Config {
        Self::load().unwrap_or_default()
    }

    pub fn parse(contents: &str) -> serde_json::Result<Config> {
        serde_json::from_str(contents)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn long_press(&self) -> Duration {
        Duration::from_millis(self.long_press_ms)
    }
}
