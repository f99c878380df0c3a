//! Configuration settings for stockdeck.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI configuration.
    pub ui: UiConfig,
    /// Key bindings.
    pub keybindings: KeyBindings,
}

impl Config {
    /// Load configuration from file, returning default if the file doesn't
    /// exist.
    pub fn load_or_default() -> crate::Result<Self> {
        Self::load(None)
    }

    /// Load configuration from file.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = path.unwrap_or_else(|| {
            super::config_dir()
                .map(|p| p.join("config.toml"))
                .unwrap_or_else(|_| PathBuf::from("config.toml"))
        });

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file.
    pub fn save(&self, path: Option<PathBuf>) -> crate::Result<()> {
        let config_path = path.unwrap_or_else(|| {
            super::config_dir()
                .map(|p| p.join("config.toml"))
                .unwrap_or_else(|_| PathBuf::from("config.toml"))
        });

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tick rate in milliseconds for UI updates.
    pub tick_rate_ms: u64,
    /// Enable mouse support.
    pub mouse_support: bool,
    /// Items per page in the dashboard and screener listings.
    pub page_size: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            mouse_support: true,
            page_size: 5,
        }
    }
}

/// Key bindings configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Quit the application.
    pub quit: String,
    /// Show help.
    pub help: String,
    /// Navigate up.
    pub up: String,
    /// Navigate down.
    pub down: String,
    /// Select/confirm.
    pub select: String,
    /// Cancel/back.
    pub back: String,
    /// Refresh data.
    pub refresh: String,
    /// Switch to the dashboard view.
    pub dashboard: String,
    /// Switch to the screener view.
    pub screener: String,
    /// Switch to the stock details view.
    pub details: String,
    /// Switch to the news view.
    pub news: String,
    /// Open search.
    pub search: String,
    /// Previous listing page.
    pub page_prev: String,
    /// Next listing page.
    pub page_next: String,
    /// Add the highlighted stock to the watchlist.
    pub watch: String,
    /// Remove the highlighted stock from the watchlist.
    pub unwatch: String,
    /// Cycle the chart timeframe.
    pub timeframe: String,
    /// Cycle the news sentiment filter.
    pub sentiment: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            help: "?".to_string(),
            up: "k".to_string(),
            down: "j".to_string(),
            select: "Enter".to_string(),
            back: "Esc".to_string(),
            refresh: "r".to_string(),
            dashboard: "1".to_string(),
            screener: "2".to_string(),
            details: "3".to_string(),
            news: "4".to_string(),
            search: "/".to_string(),
            page_prev: "Left".to_string(),
            page_next: "Right".to_string(),
            watch: "w".to_string(),
            unwatch: "x".to_string(),
            timeframe: "t".to_string(),
            sentiment: "f".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_round_trip_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.ui.page_size, config.ui.page_size);
        assert_eq!(parsed.keybindings.quit, config.keybindings.quit);
    }

    #[test]
    fn partial_files_fall_back_to_defaults() {
        let parsed: Config = toml::from_str("[ui]\npage_size = 10\n").unwrap();
        assert_eq!(parsed.ui.page_size, 10);
        assert_eq!(parsed.ui.tick_rate_ms, 250);
        assert_eq!(parsed.keybindings.search, "/");
    }
}
