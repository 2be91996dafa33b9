// SPDX-License-Identifier: MPL-2.0
//! This module handles the viewer configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[view]` - Fit behavior and animation durations
//! - `[input]` - Zoom step, wheel line height and keyboard pan step
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass a base directory to the `_with_override()` functions
//! 3. Set the `ICED_IMAGE_VIEW_CONFIG_DIR` environment variable
//! 4. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_image_view::config::{self, ViewSettings};
//!
//! let (mut config, _warning) = config::load();
//! config.view.fit_to_widget = Some(false);
//! config::save(&config).expect("Failed to save config");
//!
//! let settings = ViewSettings::from(&config);
//! assert!(!settings.fit_to_widget);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedImageView";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_IMAGE_VIEW_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Fit and animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewConfig {
    /// Whether the image is refitted every time the widget is resized.
    #[serde(
        default = "default_fit_to_widget",
        skip_serializing_if = "Option::is_none"
    )]
    pub fit_to_widget: Option<bool>,

    /// Duration of zoom and reset transitions.
    #[serde(
        default = "default_animation_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub animation_duration_ms: Option<u64>,

    /// Duration of the smart-zoom transition.
    #[serde(
        default = "default_smart_zoom_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub smart_zoom_duration_ms: Option<u64>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            fit_to_widget: default_fit_to_widget(),
            animation_duration_ms: default_animation_duration_ms(),
            smart_zoom_duration_ms: default_smart_zoom_duration_ms(),
        }
    }
}

/// Input device settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InputConfig {
    /// Multiplicative step for the zoom in/out shortcuts.
    #[serde(default = "default_zoom_step", skip_serializing_if = "Option::is_none")]
    pub zoom_step: Option<f32>,

    /// Pixels per wheel line for devices that report line deltas.
    #[serde(
        default = "default_wheel_line_pixels",
        skip_serializing_if = "Option::is_none"
    )]
    pub wheel_line_pixels: Option<f32>,

    /// Pixels panned per arrow key press.
    #[serde(
        default = "default_pan_step_pixels",
        skip_serializing_if = "Option::is_none"
    )]
    pub pan_step_pixels: Option<f32>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            zoom_step: default_zoom_step(),
            wheel_line_pixels: default_wheel_line_pixels(),
            pan_step_pixels: default_pan_step_pixels(),
        }
    }
}

/// Persisted viewer preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub input: InputConfig,
}

// =============================================================================
// Resolved Settings
// =============================================================================

/// Configuration values resolved and clamped for use by the view component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSettings {
    pub fit_to_widget: bool,
    pub animation_duration: Duration,
    pub smart_zoom_duration: Duration,
    pub zoom_step: f32,
    pub wheel_line_pixels: f32,
    pub pan_step_pixels: f32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ViewSettings {
    fn from(config: &Config) -> Self {
        let duration = |ms: Option<u64>, default: u64| {
            Duration::from_millis(ms.unwrap_or(default).min(MAX_ANIMATION_DURATION_MS))
        };

        Self {
            fit_to_widget: config.view.fit_to_widget.unwrap_or(true),
            animation_duration: duration(
                config.view.animation_duration_ms,
                DEFAULT_ANIMATION_DURATION_MS,
            ),
            smart_zoom_duration: duration(
                config.view.smart_zoom_duration_ms,
                DEFAULT_SMART_ZOOM_DURATION_MS,
            ),
            zoom_step: clamp_finite(
                config.input.zoom_step,
                DEFAULT_ZOOM_STEP,
                MIN_ZOOM_STEP,
                MAX_ZOOM_STEP,
            ),
            wheel_line_pixels: clamp_finite(
                config.input.wheel_line_pixels,
                DEFAULT_WHEEL_LINE_PIXELS,
                MIN_WHEEL_LINE_PIXELS,
                MAX_WHEEL_LINE_PIXELS,
            ),
            pan_step_pixels: clamp_finite(
                config.input.pan_step_pixels,
                DEFAULT_PAN_STEP_PIXELS,
                MIN_PAN_STEP_PIXELS,
                MAX_PAN_STEP_PIXELS,
            ),
        }
    }
}

/// Clamps an optional setting into range, using the default for missing or NaN values.
fn clamp_finite(value: Option<f32>, default: f32, min: f32, max: f32) -> f32 {
    match value {
        Some(v) if !v.is_nan() => v.clamp(min, max),
        _ => default,
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_fit_to_widget() -> Option<bool> {
    Some(true)
}

fn default_animation_duration_ms() -> Option<u64> {
    Some(DEFAULT_ANIMATION_DURATION_MS)
}

fn default_smart_zoom_duration_ms() -> Option<u64> {
    Some(DEFAULT_SMART_ZOOM_DURATION_MS)
}

fn default_zoom_step() -> Option<f32> {
    Some(DEFAULT_ZOOM_STEP)
}

fn default_wheel_line_pixels() -> Option<f32> {
    Some(DEFAULT_WHEEL_LINE_PIXELS)
}

fn default_pan_step_pixels() -> Option<f32> {
    Some(DEFAULT_PAN_STEP_PIXELS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory, honoring the explicit override first and
/// the environment variable second.
fn get_config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = base_dir {
        return Some(dir);
    }

    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with a warning explaining what went wrong.
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
                    log::warn!(
                        "Ignoring unreadable settings file {}: {err}",
                        path.display()
                    );
                    return (Config::default(), Some(err.to_string()));
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

// =============================================================================
// Save Functions
// =============================================================================

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
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            view: ViewConfig {
                fit_to_widget: Some(false),
                animation_duration_ms: Some(120),
                smart_zoom_duration_ms: Some(800),
            },
            input: InputConfig {
                zoom_step: Some(1.5),
                wheel_line_pixels: Some(32.0),
                pan_step_pixels: Some(10.0),
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
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn load_with_override_falls_back_to_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[view\nbroken")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config =
            toml::from_str("[input]\nzoom_step = 2.0\n").expect("partial config should parse");

        assert_eq!(config.view, ViewConfig::default());
        assert_eq!(config.input.zoom_step, Some(2.0));
        assert_eq!(config.input.pan_step_pixels, Some(DEFAULT_PAN_STEP_PIXELS));
    }

    #[test]
    fn view_settings_clamp_out_of_range_values() {
        let config = Config {
            view: ViewConfig {
                fit_to_widget: None,
                animation_duration_ms: Some(60_000),
                smart_zoom_duration_ms: None,
            },
            input: InputConfig {
                zoom_step: Some(0.5),
                wheel_line_pixels: Some(f32::NAN),
                pan_step_pixels: Some(50_000.0),
            },
        };

        let settings = ViewSettings::from(&config);

        assert!(settings.fit_to_widget);
        assert_eq!(
            settings.animation_duration,
            Duration::from_millis(MAX_ANIMATION_DURATION_MS)
        );
        assert_eq!(
            settings.smart_zoom_duration,
            Duration::from_millis(DEFAULT_SMART_ZOOM_DURATION_MS)
        );
        assert_eq!(settings.zoom_step, MIN_ZOOM_STEP);
        assert_eq!(settings.wheel_line_pixels, DEFAULT_WHEEL_LINE_PIXELS);
        assert_eq!(settings.pan_step_pixels, MAX_PAN_STEP_PIXELS);
    }

    #[test]
    fn default_settings_match_defaults_module() {
        let settings = ViewSettings::default();
        assert!(settings.fit_to_widget);
        assert_eq!(
            settings.animation_duration,
            Duration::from_millis(DEFAULT_ANIMATION_DURATION_MS)
        );
        assert_eq!(settings.zoom_step, DEFAULT_ZOOM_STEP);
    }
}
