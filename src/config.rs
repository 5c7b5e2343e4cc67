//! Configuration support for plinth.
//!
//! Settings are plain serde structures that can be exported to and imported
//! from JSON. Layout values are validated when converted into the core
//! configuration types, so a bad import fails before any controller is built.

use std::time::Duration;

use plinth_layout::constants::{
    DEFAULT_ITEM_HEIGHT, DEFAULT_OVERLAY_OFFSET, DEFAULT_OVERLAY_PADDING, DEFAULT_OVERSCAN,
    DEFAULT_REPOSITION_DEBOUNCE, DEFAULT_VIEWPORT_HEIGHT,
};
use plinth_layout::{Alignment, Debouncer, LayoutError, PositionConfig, WindowConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Verbosity of the `plinth-native` logger.
///
/// `RUST_LOG`, when set, takes precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    /// Rejected settings
    Warn,
    /// Demo summaries
    #[default]
    Info,
    /// Overlay open/close and list shrink corrections
    Debug,
    /// Every debounce arm, frame and recompute
    Trace,
}

impl LogLevel {
    /// Label printed at startup.
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// Filter handed to `env_logger`.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Settings format version written by [`AppConfig::to_json`].
pub const CONFIG_VERSION: u32 = 1;

/// Overlay and list settings for the demos, stored as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Files newer than [`CONFIG_VERSION`] are rejected
    pub version: u32,

    #[serde(default)]
    pub log_level: LogLevel,

    /// Dropdown/overlay positioning
    #[serde(default)]
    pub overlay: OverlaySettings,

    /// Windowed list geometry
    #[serde(default)]
    pub list: ListSettings,
}

/// Overlay positioning section of the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlaySettings {
    #[serde(default)]
    pub preferred_alignment: Alignment,

    /// Gap between trigger and panel, in pixels
    #[serde(default = "default_offset")]
    pub offset: f32,

    /// Clearance from the viewport edges, in pixels
    #[serde(default = "default_padding")]
    pub padding: f32,

    /// Quiet period before a resize/scroll recompute, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_offset() -> f32 {
    DEFAULT_OVERLAY_OFFSET
}

fn default_padding() -> f32 {
    DEFAULT_OVERLAY_PADDING
}

fn default_debounce_ms() -> u64 {
    DEFAULT_REPOSITION_DEBOUNCE.as_millis() as u64
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            preferred_alignment: Alignment::default(),
            offset: default_offset(),
            padding: default_padding(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl OverlaySettings {
    /// The solver configuration.
    pub fn position_config(&self) -> PositionConfig {
        PositionConfig::new(self.preferred_alignment, self.offset, self.padding)
    }

    /// The recompute debounce delay.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Windowed list section of the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListSettings {
    /// Fixed row height, in pixels
    #[serde(default = "default_item_height")]
    pub item_height: f32,

    /// Height of the scrolling viewport, in pixels
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f32,

    /// Extra rows rendered above and below the viewport
    #[serde(default = "default_overscan")]
    pub overscan: usize,
}

fn default_item_height() -> f32 {
    DEFAULT_ITEM_HEIGHT
}

fn default_viewport_height() -> f32 {
    DEFAULT_VIEWPORT_HEIGHT
}

fn default_overscan() -> usize {
    DEFAULT_OVERSCAN
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            item_height: default_item_height(),
            viewport_height: default_viewport_height(),
            overscan: default_overscan(),
        }
    }
}

impl ListSettings {
    /// Convert into a validated window configuration.
    pub fn window_config(&self) -> Result<WindowConfig, LayoutError> {
        WindowConfig::new(self.item_height, self.viewport_height, self.overscan)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    /// Settings matching the core defaults.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            log_level: LogLevel::default(),
            overlay: OverlaySettings::default(),
            list: ListSettings::default(),
        }
    }

    /// Pretty-printed JSON export.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Import settings, checking the version and every layout value.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that every layout value is accepted by the core.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Err(e) = self.list.window_config() {
            log::warn!("Rejecting list settings: {}", e);
            return Err(e.into());
        }
        if let Err(e) = Debouncer::new(self.overlay.debounce()) {
            log::warn!("Rejecting overlay settings: {}", e);
            return Err(e.into());
        }
        Ok(())
    }

    /// Read and parse a configuration file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }
}

/// Why a settings file could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Malformed settings JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Written by a newer plinth
    #[error("Settings version {file_version} is not supported (up to {supported_version})")]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// Item height, viewport height or debounce out of range
    #[error("Invalid layout settings: {0}")]
    Layout(#[from] LayoutError),

    #[error("Cannot read settings file: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_core() {
        let config = AppConfig::new();
        assert_eq!(config.overlay.position_config(), PositionConfig::default());
        assert_eq!(config.overlay.debounce(), Duration::from_millis(150));
        assert_eq!(config.list.window_config().unwrap(), WindowConfig::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut config = AppConfig::new();
        config.log_level = LogLevel::Debug;
        config.overlay.preferred_alignment = Alignment::Right;

        let json = config.to_json().unwrap();
        assert!(json.contains("\"right\""));
        assert_eq!(AppConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = AppConfig::from_json(r#"{"version": 1}"#).unwrap();
        assert_eq!(config, AppConfig::new());

        let config = AppConfig::from_json(r#"{"version": 1, "list": {"overscan": 0}}"#).unwrap();
        assert_eq!(config.list.overscan, 0);
        assert_eq!(config.list.item_height, 96.0);
    }

    #[test]
    fn test_rejects_newer_version() {
        let err = AppConfig::from_json(r#"{"version": 99}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::VersionTooNew {
                file_version: 99,
                supported_version: 1
            }
        ));
    }

    #[test]
    fn test_rejects_invalid_item_height() {
        let err = AppConfig::from_json(r#"{"version": 1, "list": {"item_height": 0}}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Layout(LayoutError::InvalidItemHeight { .. })
        ));
    }

    #[test]
    fn test_rejects_excessive_debounce() {
        let err = AppConfig::from_json(r#"{"version": 1, "overlay": {"debounce_ms": 60000}}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Layout(LayoutError::InvalidDebounceDelay { .. })
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            AppConfig::from_json("{not json"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::default().to_level_filter(), log::LevelFilter::Info);
        assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
        assert_eq!(LogLevel::Warn.name(), "Warn");
    }
}
