//! Opaque references into the string catalog and sprite sheet.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Key into the localized string catalog.
///
/// Creatures never carry display text directly; the text is looked up for the
/// active locale whenever it is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextRef(Cow<'static, str>);

impl TextRef {
    /// Reference that always resolves to the empty string.
    pub const EMPTY: Self = Self(Cow::Borrowed(""));

    /// Creates a reference from a static key.
    #[must_use]
    pub const fn from_static(key: &'static str) -> Self {
        Self(Cow::Borrowed(key))
    }

    /// Creates a reference from an owned key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(Cow::Owned(key.into()))
    }

    /// Returns the catalog key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.0
    }

    /// Returns true for the empty reference.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for TextRef {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Display for TextRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a sprite in the sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(u16);

impl ImageRef {
    /// "No image" sentinel.
    pub const NONE: Self = Self(0);

    /// Creates a reference from a raw id.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn id(self) -> u16 {
        self.0
    }

    /// Returns true for the "no image" sentinel.
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl From<u16> for ImageRef {
    fn from(id: u16) -> Self {
        Self(id)
    }
}
