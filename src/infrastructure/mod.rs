//! Infrastructure layer with adapters for files and bundled resources.

/// Application configuration.
pub mod config;
/// Localized string tables.
pub mod i18n;
/// Preference persistence.
pub mod preferences;
pub mod sprites;

pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, StorageManager, ThemeConfig, ThemeMode};
pub use i18n::StringCatalog;
pub use preferences::{FilePreferences, InMemoryPreferences};
pub use sprites::SpriteSheet;
