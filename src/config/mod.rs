// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[selector]` - Category selector input tuning
//! - `[portfolio]` - Data file and category order
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI flag or `FOLIO_WHEEL_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use folio_wheel::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::selector::InputPolicy;
use crate::domain::ui::{DragThreshold, LockDuration, ScaleFloor, WheelCooldown};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Category selector tuning. Values are clamped when converted to a policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectorConfig {
    #[serde(
        default = "default_wheel_cooldown_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub wheel_cooldown_ms: Option<u64>,

    #[serde(default = "default_lock_ms", skip_serializing_if = "Option::is_none")]
    pub lock_ms: Option<u64>,

    #[serde(
        default = "default_drag_threshold_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub drag_threshold_px: Option<f32>,

    #[serde(
        default = "default_min_label_scale",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_label_scale: Option<f32>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            wheel_cooldown_ms: default_wheel_cooldown_ms(),
            lock_ms: default_lock_ms(),
            drag_threshold_px: default_drag_threshold_px(),
            min_label_scale: default_min_label_scale(),
        }
    }
}

impl SelectorConfig {
    /// Input policy with every value clamped to its valid range.
    #[must_use]
    pub fn input_policy(&self) -> InputPolicy {
        InputPolicy {
            wheel_cooldown: self
                .wheel_cooldown_ms
                .map(WheelCooldown::new)
                .unwrap_or_default(),
            lock_duration: self.lock_ms.map(LockDuration::new).unwrap_or_default(),
            drag_threshold: self
                .drag_threshold_px
                .map(DragThreshold::new)
                .unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn scale_floor(&self) -> ScaleFloor {
        self.min_label_scale
            .map(ScaleFloor::new)
            .unwrap_or_default()
    }
}

/// Portfolio content settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PortfolioConfig {
    /// JSON file to read instead of the bundled demo content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_path: Option<PathBuf>,

    /// Category order shown by the selector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
}

impl PortfolioConfig {
    /// Configured category order, or the built-in default.
    ///
    /// Blank entries are dropped; an empty result falls back to the default.
    #[must_use]
    pub fn category_order(&self) -> Vec<String> {
        let configured: Vec<String> = self
            .categories
            .iter()
            .flatten()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();

        if configured.is_empty() {
            DEFAULT_CATEGORIES.iter().map(|c| (*c).to_string()).collect()
        } else {
            configured
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub selector: SelectorConfig,

    #[serde(default)]
    pub portfolio: PortfolioConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_wheel_cooldown_ms() -> Option<u64> {
    Some(DEFAULT_WHEEL_COOLDOWN_MS)
}

fn default_lock_ms() -> Option<u64> {
    Some(DEFAULT_LOCK_MS)
}

fn default_drag_threshold_px() -> Option<f32> {
    Some(DEFAULT_DRAG_THRESHOLD_PX)
}

fn default_min_label_scale() -> Option<f32> {
    Some(DEFAULT_MIN_LABEL_SCALE)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            selector: SelectorConfig {
                wheel_cooldown_ms: Some(500),
                lock_ms: Some(80),
                drag_threshold_px: Some(32.0),
                min_label_scale: Some(0.7),
            },
            portfolio: PortfolioConfig {
                data_path: Some(PathBuf::from("/srv/portfolio.json")),
                categories: Some(vec!["Applied ML".to_string(), "Web Dev".to_string()]),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_warns_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"fr\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
        assert_eq!(loaded.selector, SelectorConfig::default());
        assert!(loaded.portfolio.categories.is_none());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert!(toml::from_str::<Config>("[general]\ntheme_mode = \"neon\"\n").is_err());
    }

    #[test]
    fn selector_values_are_clamped_into_policy() {
        let selector = SelectorConfig {
            wheel_cooldown_ms: Some(1),
            lock_ms: Some(100_000),
            drag_threshold_px: None,
            min_label_scale: Some(0.1),
        };
        let policy = selector.input_policy();
        assert_eq!(policy.wheel_cooldown.millis(), 100);
        assert_eq!(policy.lock_duration.millis(), 250);
        assert_abs_diff_eq!(policy.drag_threshold.pixels(), DEFAULT_DRAG_THRESHOLD_PX);
        assert_abs_diff_eq!(selector.scale_floor().value(), 0.5);
    }

    #[test]
    fn category_order_falls_back_to_default() {
        let empty = PortfolioConfig {
            data_path: None,
            categories: Some(vec!["  ".to_string()]),
        };
        assert_eq!(empty.category_order().len(), DEFAULT_CATEGORIES.len());
        assert_eq!(empty.category_order()[0], "Agentic AI & RL");

        let custom = PortfolioConfig {
            data_path: None,
            categories: Some(vec![" Stats ".to_string()]),
        };
        assert_eq!(custom.category_order(), vec!["Stats".to_string()]);
    }
}
