/// Application settings
///
/// Settings live in a small JSON file in the user's config directory:
/// - Linux: ~/.config/threshold-studio/settings.json
/// - macOS: ~/Library/Application Support/threshold-studio/settings.json
/// - Windows: %APPDATA%\threshold-studio\settings.json
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::state::edit::Adjustments;

const APP_DIR: &str = "threshold-studio";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Folder that mirrors every loaded image and is scanned at startup
    pub working_dir: PathBuf,
    /// Adjustments at startup and after a reset
    pub adjustments: Adjustments,
    /// Initial window size in logical pixels
    pub window_width: f32,
    pub window_height: f32,
    /// Width of the image list / controls column
    pub sidebar_width: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            working_dir: default_working_dir(),
            adjustments: Adjustments::default(),
            window_width: 1024.0,
            window_height: 768.0,
            sidebar_width: 220.0,
        }
    }
}

/// `<data_dir>/threshold-studio/images`
fn default_working_dir() -> PathBuf {
    let mut path = dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    path.push(APP_DIR);
    path.push("images");
    path
}

/// Where the settings file is expected, if the platform has a config dir
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
}

impl Settings {
    /// Read settings from `path`
    ///
    /// A missing file yields the defaults, which are written back so the
    /// user has something to edit. Any other failure is returned.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let settings = Self::default();
            settings.save_to(path)?;
            log::info!("📝 Wrote default settings to {}", path.display());
            return Ok(settings);
        }

        let json = fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Write settings as pretty JSON, creating parent folders as needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| AppError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings from the standard location, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = settings_path() else {
            log::warn!("⚠️  No config directory on this platform, using default settings");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("⚠️  Ignoring settings ({}), using defaults", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = Settings::load_from(&path).unwrap();

        assert_eq!(settings, Settings::default());
        assert!(path.exists());
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            working_dir: dir.path().join("images"),
            adjustments: Adjustments {
                threshold: 90,
                invert: true,
                ..Adjustments::default()
            },
            window_width: 800.0,
            window_height: 600.0,
            sidebar_width: 180.0,
        };

        settings.save_to(&path).unwrap();

        assert_eq!(Settings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "adjustments": { "threshold": 200 } }"#).unwrap();

        let settings = Settings::load_from(&path).unwrap();

        assert_eq!(settings.adjustments.threshold, 200);
        assert!(settings.adjustments.brightness_enabled);
        assert_eq!(settings.sidebar_width, Settings::default().sidebar_width);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(Settings::load_from(&path), Err(AppError::Settings(_))));
    }
}
