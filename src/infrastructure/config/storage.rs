//! Config and preference files on disk.

use super::app_config::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, AppConfig};
use crate::domain::settings::AppSettings;
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

const CONFIG_FILE_NAME: &str = "config.toml";
const PREFERENCES_FILE_NAME: &str = "preferences.toml";
const DARK_MODE_KEY: &str = "dark_mode";
const LANGUAGE_KEY: &str = "language";

/// Failures while locating, reading or writing configuration files.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ConfigError {
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("toml deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

/// Owns the configuration directory and the files inside it.
pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Create a new `StorageManager` rooted at the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration directory cannot be determined.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(ConfigError::ConfigDirNotFound)?;

        Ok(Self { config_dir })
    }

    /// Creates a new `StorageManager` with a specific directory (useful for testing).
    #[must_use]
    pub fn with_dir(path: PathBuf) -> Self {
        Self { config_dir: path }
    }

    /// Returns the configuration directory path.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Returns the preference file path.
    #[must_use]
    pub fn preferences_path(&self) -> PathBuf {
        self.config_dir.join(PREFERENCES_FILE_NAME)
    }

    /// Ensures the configuration directory exists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created.
    pub fn ensure_config_dir(&self) -> Result<(), ConfigError> {
        if !self.config_dir.exists() {
            info!("Creating configuration directory at {:?}", self.config_dir);
            fs::create_dir_all(&self.config_dir)?;
        }
        Ok(())
    }

    /// Loads the application configuration, writing a default file when
    /// none exists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or the default cannot
    /// be written.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<AppConfig, ConfigError> {
        self.ensure_config_dir()?;
        let config_path = path_override.map_or_else(
            || self.config_dir.join(CONFIG_FILE_NAME),
            std::path::Path::to_path_buf,
        );

        if !config_path.exists() {
            info!(
                "Config file not found at {:?}, creating default.",
                config_path
            );
            let default_config = AppConfig::default();
            if let Some(parent) = config_path.parent() {
                fs::create_dir_all(parent)?;
            }
            Self::save_to_file(&config_path, &default_config)?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(&config_path)?;
        match toml::from_str::<AppConfig>(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!("Failed to parse config file: {}. Using defaults.", e);
                Ok(AppConfig::default())
            }
        }
    }

    /// Loads the stored preferences. A missing file yields defaults.
    ///
    /// Each key is read on its own: a missing or mistyped value falls back to
    /// its default without affecting the other key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read. A file
    /// that is not valid TOML is reset to defaults with a warning.
    pub fn load_preferences(&self) -> Result<AppSettings, ConfigError> {
        let path = self.preferences_path();

        if !path.exists() {
            return Ok(AppSettings::default());
        }

        let content = fs::read_to_string(&path)?;
        match toml::from_str::<toml::Table>(&content) {
            Ok(table) => Ok(Self::settings_from_table(&table)),
            Err(e) => {
                warn!("Failed to parse preferences file: {}. Using defaults.", e);
                Ok(AppSettings::default())
            }
        }
    }

    fn settings_from_table(table: &toml::Table) -> AppSettings {
        let mut settings = AppSettings::default();

        match table.get(DARK_MODE_KEY) {
            Some(toml::Value::Boolean(dark_mode)) => settings.dark_mode = *dark_mode,
            Some(other) => warn!(key = DARK_MODE_KEY, value = %other, "Ignoring invalid preference"),
            None => {}
        }

        match table.get(LANGUAGE_KEY) {
            Some(toml::Value::String(code)) => settings.locale.clone_from(code),
            Some(other) => warn!(key = LANGUAGE_KEY, value = %other, "Ignoring invalid preference"),
            None => {}
        }

        settings
    }

    /// Saves the preferences.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be written.
    pub fn save_preferences(&self, settings: &AppSettings) -> Result<(), ConfigError> {
        self.ensure_config_dir()?;
        Self::save_to_file(&self.preferences_path(), settings)
    }

    fn save_to_file<T: serde::Serialize>(path: &Path, data: &T) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(data)?;

        let parent = path
            .parent()
            .ok_or_else(|| std::io::Error::other("Invalid path"))?;
        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.persist(path).map_err(|e| e.error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use test_case::test_case;

    #[test]
    fn test_ensure_config_dir_creates_directory() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("pikdex");
        let manager = StorageManager::with_dir(config_path.clone());

        assert!(!config_path.exists());
        manager.ensure_config_dir().unwrap();
        assert!(config_path.exists());
    }

    #[test]
    fn test_load_config_creates_default_if_missing() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());

        let config = manager.load_config(None).unwrap();
        assert_eq!(config.splash_delay_ms, 2000);

        let config_file = dir.path().join(CONFIG_FILE_NAME);
        assert!(config_file.exists());
    }

    #[test]
    fn test_load_config_handles_malformed_file() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());
        let config_file = dir.path().join(CONFIG_FILE_NAME);

        fs::write(&config_file, "invalid_toml = [").unwrap();

        let config = manager.load_config(None).unwrap();
        assert!(!config.native_splash);
        let content = fs::read_to_string(&config_file).unwrap();
        assert_eq!(content, "invalid_toml = [");
    }

    #[test]
    fn test_missing_preferences_are_defaults() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());

        let settings = manager.load_preferences().unwrap();
        assert_eq!(settings, AppSettings::default());
        assert!(!manager.preferences_path().exists());
    }

    #[test]
    fn test_save_and_load_preferences() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());

        let settings = AppSettings {
            dark_mode: true,
            locale: "en".to_string(),
        };
        manager.save_preferences(&settings).unwrap();

        let content = fs::read_to_string(manager.preferences_path()).unwrap();
        assert!(content.contains("dark_mode = true"));
        assert!(content.contains(r#"language = "en""#));

        assert_eq!(manager.load_preferences().unwrap(), settings);
    }

    #[test]
    fn test_malformed_preferences_reset_to_defaults() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());
        fs::write(manager.preferences_path(), "dark_mode = [").unwrap();

        assert_eq!(manager.load_preferences().unwrap(), AppSettings::default());
    }

    #[test_case("dark_mode = \"yes\"\nlanguage = \"en\"", false, "en" ; "bad_dark_mode_keeps_language")]
    #[test_case("dark_mode = true\nlanguage = 7", true, "es" ; "bad_language_keeps_dark_mode")]
    #[test_case("dark_mode = 1\nlanguage = false", false, "es" ; "both_bad")]
    #[test_case("language = \"en\"\nunknown = 3", false, "en" ; "unknown_key_ignored")]
    fn test_preference_keys_are_read_independently(
        content: &str,
        dark_mode: bool,
        locale: &str,
    ) {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());
        fs::write(manager.preferences_path(), content).unwrap();

        let settings = manager.load_preferences().unwrap();

        assert_eq!(settings.dark_mode, dark_mode);
        assert_eq!(settings.locale, locale);
    }
}
