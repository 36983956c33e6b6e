//! Creature record.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::{ImageRef, TextRef};

bitflags! {
    /// Where a creature can operate. Flags are independent of each other.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Habitat: u8 {
        /// Lives on land.
        const TERRESTRIAL = 1 << 0;
        /// Lives in water.
        const AQUATIC = 1 << 1;
        /// Flies.
        const AERIAL = 1 << 2;
    }
}

impl Habitat {
    /// Builds a habitat set from the three individual flags.
    #[must_use]
    pub fn from_flags(terrestrial: bool, aquatic: bool, aerial: bool) -> Self {
        let mut habitat = Self::empty();
        habitat.set(Self::TERRESTRIAL, terrestrial);
        habitat.set(Self::AQUATIC, aquatic);
        habitat.set(Self::AERIAL, aerial);
        habitat
    }

    /// Whether the land flag is set.
    #[must_use]
    pub const fn is_terrestrial(self) -> bool {
        self.contains(Self::TERRESTRIAL)
    }

    /// Whether the water flag is set.
    #[must_use]
    pub const fn is_aquatic(self) -> bool {
        self.contains(Self::AQUATIC)
    }

    /// Whether the air flag is set.
    #[must_use]
    pub const fn is_aerial(self) -> bool {
        self.contains(Self::AERIAL)
    }
}

/// One entry of the field guide.
///
/// Every text field is a [`TextRef`] so the same record renders under any
/// locale. Records are built once in the static catalog and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    name: TextRef,
    family: TextRef,
    scientific_name: TextRef,
    habitat: Habitat,
    description: TextRef,
    characteristics: [TextRef; 3],
    image: ImageRef,
}

impl Creature {
    /// Creates a creature whose text keys follow the catalog naming scheme:
    /// `{key}`, `fam_{key}`, `cn_{key}`, `desc_{key}` and `char{n}_{key}`.
    #[must_use]
    pub const fn catalog_entry(
        keys: CatalogKeys,
        habitat: Habitat,
        image: ImageRef,
    ) -> Self {
        Self {
            name: TextRef::from_static(keys.name),
            family: TextRef::from_static(keys.family),
            scientific_name: TextRef::from_static(keys.scientific_name),
            habitat,
            description: TextRef::from_static(keys.description),
            characteristics: [
                TextRef::from_static(keys.characteristics[0]),
                TextRef::from_static(keys.characteristics[1]),
                TextRef::from_static(keys.characteristics[2]),
            ],
            image,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(&self) -> &TextRef {
        &self.name
    }

    /// Family the creature belongs to.
    #[must_use]
    pub const fn family(&self) -> &TextRef {
        &self.family
    }

    /// Scientific name.
    #[must_use]
    pub const fn scientific_name(&self) -> &TextRef {
        &self.scientific_name
    }

    /// Habitat flags.
    #[must_use]
    pub const fn habitat(&self) -> Habitat {
        self.habitat
    }

    /// Long description.
    #[must_use]
    pub const fn description(&self) -> &TextRef {
        &self.description
    }

    /// Returns the three characteristic slots in order.
    #[must_use]
    pub const fn characteristics(&self) -> &[TextRef; 3] {
        &self.characteristics
    }

    /// Sprite reference.
    #[must_use]
    pub const fn image(&self) -> ImageRef {
        self.image
    }
}

/// Static string keys of one catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct CatalogKeys {
    /// Name key, also the base of the other keys.
    pub name: &'static str,
    /// Family key.
    pub family: &'static str,
    /// Scientific name key.
    pub scientific_name: &'static str,
    /// Description key.
    pub description: &'static str,
    /// Characteristic keys in slot order.
    pub characteristics: [&'static str; 3],
}
