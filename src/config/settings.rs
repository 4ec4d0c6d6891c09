use super::theme::Theme;
use crate::constants::*;
use crate::errors::OrbitVizError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_DIR: &str = "orbitviz";
const SETTINGS_FILE: &str = "settings.json";

/// Figure and output settings. Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub elevation_deg: f64,
    pub azimuth_deg: f64,
    pub theme: Theme,
    pub output_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            width: DEFAULT_FIGURE_WIDTH,
            height: DEFAULT_FIGURE_HEIGHT,
            elevation_deg: DEFAULT_VIEW_ELEVATION_DEG,
            azimuth_deg: DEFAULT_VIEW_AZIMUTH_DEG,
            theme: Theme::Dark,
            output_dir: PathBuf::from("."),
        }
    }
}

impl Settings {
    /// Loads settings from `path` when given; otherwise from the user config
    /// directory, falling back to defaults when that file is absent (silently)
    /// or broken (with a warning).
    pub fn load(path: Option<&Path>) -> Result<Self, OrbitVizError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::or_default(Self::user_settings_path())),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, OrbitVizError> {
        let data = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&data)?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// `<config dir>/orbitviz/settings.json`, when the platform has a config dir.
    pub fn user_settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
    }

    fn or_default(path: Option<PathBuf>) -> Self {
        let Some(path) = path else {
            tracing::debug!("no config directory, using default settings");
            return Self::default();
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no user settings, using defaults");
            return Self::default();
        }
        Self::from_file(&path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring user settings");
            Self::default()
        })
    }

    pub fn figure_path(&self, file_name: &Path) -> PathBuf {
        self.output_dir.join(file_name)
    }
}
