//! Preference storage adapters.

use parking_lot::RwLock;
use tracing::{debug, error, warn};

use crate::domain::errors::PreferencesError;
use crate::domain::ports::PreferencesPort;
use crate::domain::settings::AppSettings;
use crate::infrastructure::config::StorageManager;

/// Preferences kept in `preferences.toml`.
///
/// Reads are served from memory; every setter writes the whole file
/// before returning. A failed write is logged and the in-memory value is
/// kept, so the session still sees the new value.
pub struct FilePreferences {
    storage: Option<StorageManager>,
    cache: RwLock<AppSettings>,
}

impl FilePreferences {
    /// Opens the store in the platform config directory.
    ///
    /// Falls back to memory-only storage if no config directory exists.
    #[must_use]
    pub fn new() -> Self {
        match StorageManager::new().map_err(|_| PreferencesError::DirectoryNotFound) {
            Ok(storage) => Self::with_storage(storage),
            Err(e) => {
                warn!(error = %e, "Preference persistence disabled");
                Self {
                    storage: None,
                    cache: RwLock::new(AppSettings::default()),
                }
            }
        }
    }

    /// Opens the store on top of `storage`, reading the current file.
    #[must_use]
    pub fn with_storage(storage: StorageManager) -> Self {
        let settings = storage
            .load_preferences()
            .map_err(|e| PreferencesError::read_failed(e.to_string()))
            .unwrap_or_else(|e| {
                warn!(error = %e, "Using default preferences");
                AppSettings::default()
            });
        debug!(?settings, "Loaded preferences");

        Self {
            storage: Some(storage),
            cache: RwLock::new(settings),
        }
    }

    fn update(&self, apply: impl FnOnce(&mut AppSettings)) {
        let snapshot = {
            let mut cache = self.cache.write();
            apply(&mut *cache);
            cache.clone()
        };

        if let Err(e) = self.persist(&snapshot) {
            error!(error = %e, "Failed to persist preferences");
        }
    }

    fn persist(&self, settings: &AppSettings) -> Result<(), PreferencesError> {
        let Some(storage) = &self.storage else {
            return Ok(());
        };

        storage
            .save_preferences(settings)
            .map_err(|e| PreferencesError::write_failed(e.to_string()))
    }
}

impl Default for FilePreferences {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferencesPort for FilePreferences {
    fn is_dark_mode(&self) -> bool {
        self.cache.read().dark_mode
    }

    fn set_dark_mode(&self, value: bool) {
        debug!(value, "Saving dark mode");
        self.update(|settings| settings.dark_mode = value);
    }

    fn get_locale(&self) -> String {
        self.cache.read().locale.clone()
    }

    fn set_locale(&self, code: &str) {
        debug!(code, "Saving locale");
        self.update(|settings| settings.locale = code.to_string());
    }

    fn settings(&self) -> AppSettings {
        self.cache.read().clone()
    }
}

/// Preferences that live only as long as the process.
#[derive(Default)]
pub struct InMemoryPreferences {
    settings: RwLock<AppSettings>,
}

impl InMemoryPreferences {
    /// Creates a store holding the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferencesPort for InMemoryPreferences {
    fn is_dark_mode(&self) -> bool {
        self.settings.read().dark_mode
    }

    fn set_dark_mode(&self, value: bool) {
        self.settings.write().dark_mode = value;
    }

    fn get_locale(&self) -> String {
        self.settings.read().locale.clone()
    }

    fn set_locale(&self, code: &str) {
        self.settings.write().locale = code.to_string();
    }
}
