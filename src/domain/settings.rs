//! User preferences.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Locale code used when nothing has been stored.
pub const DEFAULT_LOCALE: &str = "es";

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Spanish.
    #[default]
    Es,
    /// English.
    En,
}

impl Locale {
    /// All supported locales.
    pub const ALL: [Self; 2] = [Self::Es, Self::En];

    /// Returns the two-letter language code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    /// Parses a language code. Unknown codes fall back to Spanish.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "es" => Self::Es,
            "en" => Self::En,
            other => {
                tracing::warn!(code = %other, "Unsupported locale code, falling back to es");
                Self::Es
            }
        }
    }

    /// Returns the other supported locale.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Es => Self::En,
            Self::En => Self::Es,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Persisted user preferences.
///
/// Serialized keys match the on-disk preference file: `dark_mode` and
/// `language`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Whether the dark theme is active.
    #[serde(default)]
    pub dark_mode: bool,

    /// Two-letter language code.
    #[serde(default = "default_locale", rename = "language")]
    pub locale: String,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            locale: default_locale(),
        }
    }
}

impl AppSettings {
    /// Returns the parsed locale.
    #[must_use]
    pub fn locale(&self) -> Locale {
        Locale::from_code(&self.locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert!(!settings.dark_mode);
        assert_eq!(settings.locale, "es");
        assert_eq!(settings.locale(), Locale::Es);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings: AppSettings = toml::from_str("dark_mode = true").unwrap();
        assert!(settings.dark_mode);
        assert_eq!(settings.locale, "es");

        let settings: AppSettings = toml::from_str(r#"language = "en""#).unwrap();
        assert!(!settings.dark_mode);
        assert_eq!(settings.locale(), Locale::En);
    }

    #[test]
    fn test_locale_codes() {
        assert_eq!(Locale::from_code("en"), Locale::En);
        assert_eq!(Locale::from_code(" ES "), Locale::Es);
        assert_eq!(Locale::from_code("fr"), Locale::Es);
        assert_eq!(Locale::Es.toggled(), Locale::En);
        assert_eq!(Locale::En.code(), "en");
    }
}
