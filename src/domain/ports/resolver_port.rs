//! Text and image resolution ports.

use crate::domain::entities::{ImageRef, Sprite, TextRef};
use crate::domain::settings::Locale;

/// Maps a text reference to its string in a locale.
///
/// Resolution never fails: unknown references resolve to the empty string.
#[cfg_attr(test, mockall::automock)]
pub trait TextResolver: Send + Sync {
    /// Returns the localized text for `reference`.
    fn resolve(&self, reference: &TextRef, locale: Locale) -> String;
}

/// Maps an image reference to a drawable sprite.
#[cfg_attr(test, mockall::automock)]
pub trait ImageResolver: Send + Sync {
    /// Returns the sprite, or `None` for [`ImageRef::NONE`] and unknown ids.
    fn resolve(&self, image: ImageRef) -> Option<Sprite>;
}
