/// User settings for the viewer window
///
/// Settings only shape the window and logging. The catalog and the
/// initial filter are never configurable.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use iced::{Size, Theme};
use serde::Deserialize;

use crate::error::ConfigError;

/// Environment variable overriding the configured theme
const THEME_ENV: &str = "GAME_ARCHIVE_THEME";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl ThemeChoice {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn theme(self) -> Theme {
        match self {
            Self::Dark => Theme::Dark,
            Self::Light => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemeChoice,
    pub window_width: f32,
    pub window_height: f32,
    /// tracing filter directive used when RUST_LOG is unset
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::Dark,
            window_width: 1024.0,
            window_height: 900.0,
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    /// Location of the settings file
    /// - Linux: ~/.config/game-archive/config.toml
    /// - macOS: ~/Library/Application Support/game-archive/config.toml
    /// - Windows: %APPDATA%\game-archive\config.toml
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("game-archive");
        path.push("config.toml");
        Some(path)
    }

    /// Read settings from `path`. A missing file means defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from the default location.
    ///
    /// An unusable file falls back to defaults and the error is handed
    /// back for reporting. Environment overrides apply in both cases.
    pub fn load() -> (Self, Option<ConfigError>) {
        let loaded = match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        };
        Self::resolve(loaded, std::env::var(THEME_ENV).ok().as_deref())
    }

    fn resolve(
        loaded: Result<Self, ConfigError>,
        theme_override: Option<&str>,
    ) -> (Self, Option<ConfigError>) {
        let (mut settings, error) = match loaded {
            Ok(settings) => (settings, None),
            Err(err) => (Self::default(), Some(err)),
        };
        settings.apply_env(theme_override);
        (settings, error)
    }

    fn apply_env(&mut self, theme: Option<&str>) {
        if let Some(choice) = theme.and_then(ThemeChoice::parse) {
            self.theme = choice;
        }
    }

    pub fn window_size(&self) -> Size {
        Size::new(self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn settings_file(contents: &str) -> (TempDir, PathBuf) {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).expect("write settings");
        (dir, path)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let (_dir, path) = settings_file("theme = \"light\"\nwindow_width = 800.0\n");

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.theme, ThemeChoice::Light);
        assert_eq!(settings.window_width, 800.0);
        assert_eq!(settings.window_height, Settings::default().window_height);
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn test_malformed_file_is_reported() {
        let (_dir, path) = settings_file("theme = \"sepia\"\n");

        let result = Settings::load_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_env_override() {
        let mut settings = Settings::default();

        settings.apply_env(Some("LIGHT"));
        assert_eq!(settings.theme, ThemeChoice::Light);

        settings.apply_env(Some("neon"));
        assert_eq!(settings.theme, ThemeChoice::Light);

        settings.apply_env(None);
        assert_eq!(settings.theme, ThemeChoice::Light);
    }

    #[test]
    fn test_env_override_applies_to_fallback() {
        let (_dir, path) = settings_file("window_width = \"wide\"\n");

        let (settings, error) = Settings::resolve(Settings::load_from(&path), Some("light"));

        assert!(matches!(error, Some(ConfigError::Parse { .. })));
        assert_eq!(settings.theme, ThemeChoice::Light);
        assert_eq!(settings.window_width, Settings::default().window_width);
    }

    #[test]
    fn test_resolve_keeps_loaded_file() {
        let loaded = Ok(Settings {
            log_filter: "debug".into(),
            ..Settings::default()
        });

        let (settings, error) = Settings::resolve(loaded, None);

        assert!(error.is_none());
        assert_eq!(settings.log_filter, "debug");
        assert_eq!(settings.theme, ThemeChoice::Dark);
    }
}
