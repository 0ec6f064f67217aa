//! Persisted user settings (lives in the OS config directory).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::TooltipError;
use crate::tooltip::{Localized, TimeZoneSetting};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Clock used for tooltip timestamps.
    pub time_zone: TimeZoneSetting,
    /// Show the compact custom tooltip instead of the built-in layout.
    pub use_custom_tooltip: bool,
    /// Labels for the built-in layout. Missing keys use English.
    pub localized: Localized,
    /// Timeline document opened last.
    pub last_file: Option<PathBuf>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            time_zone: TimeZoneSetting::Local,
            use_custom_tooltip: false,
            localized: Localized::default(),
            last_file: None,
        }
    }
}

impl AppSettings {
    /// Default location of the settings file.
    pub fn default_path() -> PathBuf {
        match directories::ProjectDirs::from("", "", "GanttTooltip") {
            Some(dirs) => dirs.config_dir().join("settings.json"),
            None => PathBuf::from("settings.json"),
        }
    }

    /// Load settings, falling back to defaults if the file is missing or unreadable.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "ignoring malformed settings");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), TooltipError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        tracing::debug!(path = %path.display(), "settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(AppSettings::load(&dir.path().join("nope.json")), AppSettings::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let mut settings = AppSettings::default();
        settings.time_zone = TimeZoneSetting::Fixed(120);
        settings.use_custom_tooltip = true;
        settings.localized.0.insert("duration".into(), "Dauer".into());
        settings.save(&path).unwrap();
        assert_eq!(AppSettings::load(&path), settings);
    }

    #[test]
    fn partial_files_fill_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "use_custom_tooltip": true }"#).unwrap();
        let settings = AppSettings::load(&path);
        assert!(settings.use_custom_tooltip);
        assert_eq!(settings.time_zone, TimeZoneSetting::Local);
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(AppSettings::load(&path), AppSettings::default());
    }
}
