//! Preference storage port definition.

use crate::domain::settings::AppSettings;

/// Port for the two persisted user preferences.
///
/// Implementations never surface storage failures to callers: a missing
/// value reads as its default and a failed write is logged by the adapter.
/// A value written with a setter must be returned by the next getter call.
pub trait PreferencesPort: Send + Sync {
    /// Returns the stored dark mode flag, `false` if never set.
    fn is_dark_mode(&self) -> bool;

    /// Stores the dark mode flag.
    fn set_dark_mode(&self, value: bool);

    /// Returns the stored language code, `"es"` if never set.
    fn get_locale(&self) -> String;

    /// Stores the language code.
    fn set_locale(&self, code: &str);

    /// Returns both preferences at once.
    fn settings(&self) -> AppSettings {
        AppSettings {
            dark_mode: self.is_dark_mode(),
            locale: self.get_locale(),
        }
    }
}
