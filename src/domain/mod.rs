//! Domain layer with the creature catalog, preferences and port definitions.

/// Static creature catalog.
pub mod catalog;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Transient notices.
pub mod notification;
/// Port definitions.
pub mod ports;
/// User preferences.
pub mod settings;

pub use catalog::{CATALOG_LEN, creature_at, list_entities};
pub use entities::{Creature, Habitat, ImageRef, Sprite, TextRef};
pub use notification::{Notification, NotificationLevel};
pub use ports::{ImageResolver, PreferencesPort, TextResolver};
pub use settings::{AppSettings, Locale};
