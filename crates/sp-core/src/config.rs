// ABOUTME: Application configuration handling.
// ABOUTME: Loads and saves settings and custom layouts from TOML config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::layout::Layout;

/// Executor and picker preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pause between dispatched operations, in milliseconds.
    pub delay_between_splits_ms: u64,
    /// Run the trailing equalize step after building a layout.
    pub auto_equalize: bool,
    /// Cards per row in the picker grid.
    pub picker_columns: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delay_between_splits_ms: 200,
            auto_equalize: true,
            picker_columns: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub settings: Settings,

    /// Layout ids removed from the picker (still addressable directly).
    pub hidden_layouts: Vec<String>,

    /// User-defined layouts, stored as full records so they survive
    /// upgrades without re-generation.
    pub custom_layouts: Vec<Layout>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

impl Config {
    /// Get the default config file path (~/.config/splitplan/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("splitplan").join("config.toml"))
    }

    /// Load config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save config to default path
    pub fn save_to_default(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::default_path().ok_or_else(|| {
            ConfigError::ReadError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;
        self.save(&path)?;
        Ok(path)
    }

    /// Add or replace a custom layout, keyed by id.
    pub fn add_layout(&mut self, layout: Layout) {
        self.custom_layouts.retain(|l| l.id != layout.id);
        self.custom_layouts.push(layout);
    }

    pub fn is_hidden(&self, id: &str) -> bool {
        self.hidden_layouts.iter().any(|h| h == id)
    }

    pub fn hide_layout(&mut self, id: &str) {
        if !self.is_hidden(id) {
            self.hidden_layouts.push(id.to_string());
        }
    }

    pub fn show_layout(&mut self, id: &str) {
        self.hidden_layouts.retain(|h| h != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::op::{Direction, PaneOp};

    fn custom_layout() -> Layout {
        Layout {
            id: "my-layout".to_string(),
            name: "My Layout".to_string(),
            description: "2 equal columns".to_string(),
            preview: vec![
                "┌──────┬──────┐".to_string(),
                "│  A   │  B   │".to_string(),
                "└──────┴──────┘".to_string(),
            ],
            steps: vec![
                PaneOp::split(Direction::Right),
                PaneOp::focus(Direction::Previous),
                PaneOp::Delay { delay_ms: 100 },
                PaneOp::Equalize,
            ],
            pane_count: 2,
            final_focus: Direction::Previous,
        }
    }

    #[test]
    fn defaults_are_sensible() {
        let config = Config::default();
        assert_eq!(config.settings.delay_between_splits_ms, 200);
        assert!(config.settings.auto_equalize);
        assert_eq!(config.settings.picker_columns, 3);
        assert!(config.custom_layouts.is_empty());
    }

    #[test]
    fn parses_partial_config() {
        let config: Config = toml::from_str(
            "[settings]\ndelay_between_splits_ms = 50\n",
        )
        .unwrap();
        assert_eq!(config.settings.delay_between_splits_ms, 50);
        // Unspecified fields keep their defaults
        assert!(config.settings.auto_equalize);
        assert_eq!(config.settings.picker_columns, 3);
    }

    #[test]
    fn layout_round_trips_through_toml() {
        let mut config = Config::default();
        config.add_layout(custom_layout());

        let text = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn save_and_load_round_trip() {
        let mut config = Config::default();
        config.settings.delay_between_splits_ms = 75;
        config.add_layout(custom_layout());
        config.hide_layout("two-rows");

        let path = std::env::temp_dir().join("splitplan_test_config.toml");
        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn add_layout_replaces_same_id() {
        let mut config = Config::default();
        config.add_layout(custom_layout());

        let mut updated = custom_layout();
        updated.name = "Renamed".to_string();
        config.add_layout(updated);

        assert_eq!(config.custom_layouts.len(), 1);
        assert_eq!(config.custom_layouts[0].name, "Renamed");
    }

    #[test]
    fn hide_and_show() {
        let mut config = Config::default();
        config.hide_layout("grid-2x2");
        config.hide_layout("grid-2x2");
        assert!(config.is_hidden("grid-2x2"));
        assert_eq!(config.hidden_layouts.len(), 1);

        config.show_layout("grid-2x2");
        assert!(!config.is_hidden("grid-2x2"));
    }
}
