//! Localized string catalog.

use std::collections::HashMap;

use tracing::{debug, error};

use crate::domain::entities::TextRef;
use crate::domain::ports::TextResolver;
use crate::domain::settings::Locale;

const ES_STRINGS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/locales/es.toml"));
const EN_STRINGS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/locales/en.toml"));

/// String tables for every supported locale.
///
/// Each locale is a flat TOML table of `key = "text"` pairs.
pub struct StringCatalog {
    tables: HashMap<Locale, HashMap<String, String>>,
}

impl StringCatalog {
    /// Loads the tables bundled with the binary.
    #[must_use]
    pub fn bundled() -> Self {
        Self::from_sources(&[(Locale::Es, ES_STRINGS), (Locale::En, EN_STRINGS)])
    }

    /// Parses one TOML source per locale. A source that fails to parse
    /// leaves its locale empty.
    #[must_use]
    pub fn from_sources(sources: &[(Locale, &str)]) -> Self {
        let tables = sources
            .iter()
            .map(|(locale, source)| {
                let table = toml::from_str::<HashMap<String, String>>(source).unwrap_or_else(|e| {
                    error!(locale = %locale, error = %e, "Failed to parse string table");
                    HashMap::new()
                });
                debug!(locale = %locale, entries = table.len(), "Loaded string table");
                (*locale, table)
            })
            .collect();

        Self { tables }
    }

    /// Returns whether `locale` has an entry for `key`.
    #[must_use]
    pub fn contains(&self, key: &str, locale: Locale) -> bool {
        self.tables
            .get(&locale)
            .is_some_and(|table| table.contains_key(key))
    }

    /// Number of entries for `locale`.
    #[must_use]
    pub fn len(&self, locale: Locale) -> usize {
        self.tables.get(&locale).map_or(0, HashMap::len)
    }
}

impl TextResolver for StringCatalog {
    fn resolve(&self, reference: &TextRef, locale: Locale) -> String {
        if reference.is_empty() {
            return String::new();
        }

        match self
            .tables
            .get(&locale)
            .and_then(|table| table.get(reference.key()))
        {
            Some(text) => text.clone(),
            None => {
                debug!(key = %reference, locale = %locale, "Missing string");
                String::new()
            }
        }
    }
}
