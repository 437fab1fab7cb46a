// SPDX-License-Identifier: MPL-2.0
//! Viewer settings read from an optional `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[display]` - Zoom step and background color
//! - `[window]` - Initial window size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `ICED_GLANCE_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! The file is only ever read. A missing file yields the defaults; a file that
//! cannot be parsed yields the defaults plus a warning for the caller to log.
//!
//! # Examples
//!
//! ```no_run
//! use iced_glance::config;
//!
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! println!("zoom step: {}%", config.display.zoom_step_percent());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundTheme {
    Light,
    #[default]
    Dark,
}

/// Display and viewer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Zoom step percentage applied per wheel notch.
    #[serde(default = "default_zoom_step", skip_serializing_if = "Option::is_none")]
    pub zoom_step: Option<f32>,

    /// Color behind the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_theme: Option<BackgroundTheme>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            zoom_step: default_zoom_step(),
            background_theme: Some(BackgroundTheme::default()),
        }
    }
}

impl DisplayConfig {
    /// Zoom step in percent, clamped to the accepted range.
    #[must_use]
    pub fn zoom_step_percent(&self) -> f32 {
        let step = self.zoom_step.unwrap_or(DEFAULT_ZOOM_STEP_PERCENT);
        if step.is_finite() {
            step.clamp(MIN_ZOOM_STEP_PERCENT, MAX_ZOOM_STEP_PERCENT)
        } else {
            DEFAULT_ZOOM_STEP_PERCENT
        }
    }

    #[must_use]
    pub fn background(&self) -> BackgroundTheme {
        self.background_theme.unwrap_or_default()
    }
}

/// Initial window geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: f32,

    #[serde(default = "default_window_height")]
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl WindowConfig {
    /// Window size, never smaller than the minimum window size.
    #[must_use]
    pub fn size(&self) -> iced::Size {
        iced::Size::new(
            clamp_dimension(self.width, MIN_WINDOW_WIDTH, DEFAULT_WINDOW_WIDTH),
            clamp_dimension(self.height, MIN_WINDOW_HEIGHT, DEFAULT_WINDOW_HEIGHT),
        )
    }

    #[must_use]
    pub fn min_size() -> iced::Size {
        iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)
    }
}

fn clamp_dimension(value: f32, min: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.max(min)
    } else {
        fallback
    }
}

/// Viewer configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Display and viewer settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Initial window geometry.
    #[serde(default)]
    pub window: WindowConfig,
}

fn default_zoom_step() -> Option<f32> {
    Some(DEFAULT_ZOOM_STEP_PERCENT)
}

fn default_window_width() -> f32 {
    DEFAULT_WINDOW_WIDTH
}

fn default_window_height() -> f32 {
    DEFAULT_WINDOW_HEIGHT
}

/// Loads the configuration from the resolved config directory.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_from_dir(paths::get_app_config_dir())
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    load_from_dir(paths::get_app_config_dir_with_override(base_dir))
}

fn load_from_dir(dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = dir.map(|dir| dir.join(CONFIG_FILE)) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!(
                "Ignoring {}: {err}; using default settings",
                path.display()
            )),
        ),
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::app::paths::ENV_CONFIG_DIR;
    use crate::test_utils::{assert_abs_diff_eq, ENV_MUTEX};
    use tempfile::tempdir;

    fn write_settings(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, content).expect("failed to write settings");
        path
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_abs_diff_eq!(config.display.zoom_step_percent(), 2.0);
        assert_eq!(config.display.background(), BackgroundTheme::Dark);
        assert_eq!(config.window.size(), iced::Size::new(800.0, 650.0));
    }

    #[test]
    fn load_from_path_reads_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_settings(
            temp_dir.path(),
            r#"
[display]
zoom_step = 5.0
background_theme = "light"

[window]
width = 1024
height = 768
"#,
        );

        let config = load_from_path(&path).expect("failed to load config");
        assert_eq!(config.display.zoom_step, Some(5.0));
        assert_eq!(config.display.background(), BackgroundTheme::Light);
        assert_eq!(config.window.size(), iced::Size::new(1024.0, 768.0));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_settings(temp_dir.path(), "[display]\nzoom_step = 3.5\n");

        let config = load_from_path(&path).expect("failed to load config");
        assert_eq!(config.display.zoom_step, Some(3.5));
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn zoom_step_is_clamped() {
        let mut display = DisplayConfig {
            zoom_step: Some(0.01),
            ..DisplayConfig::default()
        };
        assert_abs_diff_eq!(display.zoom_step_percent(), MIN_ZOOM_STEP_PERCENT);

        display.zoom_step = Some(400.0);
        assert_abs_diff_eq!(display.zoom_step_percent(), MAX_ZOOM_STEP_PERCENT);

        display.zoom_step = Some(f32::NAN);
        assert_abs_diff_eq!(display.zoom_step_percent(), DEFAULT_ZOOM_STEP_PERCENT);
    }

    #[test]
    fn window_size_respects_minimum() {
        let window = WindowConfig {
            width: 10.0,
            height: 10.0,
        };
        assert_eq!(window.size(), WindowConfig::min_size());
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_settings(temp_dir.path(), "[display\nzoom_step = ");

        match load_from_path(&path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn load_with_override_without_file_returns_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_invalid_file_warns() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        write_settings(temp_dir.path(), "background_theme = [");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some_and(|w| w.contains(CONFIG_FILE)));
    }

    #[test]
    fn load_reads_settings_from_env_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let temp_dir = tempdir().expect("failed to create temp dir");
        write_settings(temp_dir.path(), "[window]\nwidth = 1024.0\n");
        std::env::set_var(ENV_CONFIG_DIR, temp_dir.path());

        let (config, warning) = load();
        std::env::remove_var(ENV_CONFIG_DIR);

        assert!(warning.is_none());
        assert_abs_diff_eq!(config.window.width, 1024.0);
    }

    #[test]
    fn unknown_background_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_settings(
            temp_dir.path(),
            "[display]\nbackground_theme = \"checkerboard\"\n",
        );
        assert!(load_from_path(&path).is_err());
    }
}
