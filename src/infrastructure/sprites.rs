//! Built-in sprite sheet.

use tracing::trace;

use crate::domain::entities::{ImageRef, Sprite};
use crate::domain::ports::ImageResolver;

const PIKMIN: &[&str] = &[
    r"    ,    ",
    r"   (*)   ",
    r"    |    ",
    r"  .---.  ",
    r" ( o o ) ",
    r"  \ - /  ",
    r"  /| |\  ",
    r"   / \   ",
];

const PIKMIN_WINGED: &[&str] = &[
    r"    ,    ",
    r"   (*)   ",
    r"    |    ",
    r"  .---.  ",
    r"<( o o )>",
    r"  \ - /  ",
    r"   | |   ",
    r"   / \   ",
];

const PIKMIN_ROCK: &[&str] = &[
    r"         ",
    r"   ___   ",
    r"  /   \  ",
    r" | o o | ",
    r" |  ^  | ",
    r"  \___/  ",
    r"   / \   ",
    r"         ",
];

const GRUB: &[&str] = &[
    r"  .-----.  ",
    r" /  o o  \ ",
    r"|  .   .  |",
    r"|  \___/  |",
    r" \_______/ ",
    r"  ||   ||  ",
];

const BUG: &[&str] = &[
    r"  \   /  ",
    r"   \_/   ",
    r" =(o o)= ",
    r"  /| |\  ",
    r" / | | \ ",
];

const AQUATIC: &[&str] = &[
    r"    ~~~    ",
    r"  ><(((o>  ",
    r"    ~~~    ",
    r" ~~~~~~~~~ ",
];

const MOUND: &[&str] = &[
    r"    *    ",
    r"  * | *  ",
    r"  _/^\_  ",
    r" /_____\ ",
];

const fn sprite(art: &'static [&'static str], r: u8, g: u8, b: u8) -> Sprite {
    Sprite::new(art, (r, g, b))
}

/// Sprites in id order. Id `n` lives at index `n - 1`.
static SHEET: [Sprite; 23] = [
    sprite(PIKMIN, 217, 74, 56),
    sprite(PIKMIN, 240, 200, 40),
    sprite(PIKMIN, 60, 110, 220),
    sprite(PIKMIN, 235, 235, 235),
    sprite(PIKMIN, 140, 70, 180),
    sprite(PIKMIN_ROCK, 120, 120, 130),
    sprite(PIKMIN_WINGED, 235, 130, 190),
    sprite(PIKMIN, 120, 210, 230),
    sprite(PIKMIN, 120, 255, 140),
    sprite(GRUB, 200, 60, 60),
    sprite(BUG, 150, 90, 60),
    sprite(BUG, 170, 140, 60),
    sprite(GRUB, 150, 130, 100),
    sprite(GRUB, 230, 110, 30),
    sprite(BUG, 190, 160, 90),
    sprite(GRUB, 200, 120, 150),
    sprite(GRUB, 90, 160, 220),
    sprite(MOUND, 120, 240, 160),
    sprite(BUG, 220, 90, 70),
    sprite(AQUATIC, 140, 170, 200),
    sprite(BUG, 100, 140, 160),
    sprite(AQUATIC, 150, 110, 170),
    sprite(AQUATIC, 230, 150, 80),
];

/// Resolves catalog images to the sprites compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpriteSheet;

impl SpriteSheet {
    /// Creates the sheet.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Number of sprites on the sheet.
    #[must_use]
    pub const fn len(&self) -> usize {
        SHEET.len()
    }

    /// Whether the sheet has no sprites.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        SHEET.is_empty()
    }
}

impl ImageResolver for SpriteSheet {
    fn resolve(&self, image: ImageRef) -> Option<Sprite> {
        if image.is_none() {
            return None;
        }

        let sprite = SHEET.get(usize::from(image.id()) - 1).copied();
        if sprite.is_none() {
            trace!(id = image.id(), "No sprite for image id");
        }
        sprite
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::list_entities;

    #[test]
    fn test_every_catalog_image_resolves() {
        let sheet = SpriteSheet::new();
        for creature in list_entities() {
            assert!(
                sheet.resolve(creature.image()).is_some(),
                "missing sprite for image {}",
                creature.image().id()
            );
        }
    }

    #[test]
    fn test_none_and_unknown_ids() {
        let sheet = SpriteSheet::new();
        assert!(sheet.resolve(ImageRef::NONE).is_none());
        assert!(sheet.resolve(ImageRef::new(24)).is_none());
        assert!(sheet.resolve(ImageRef::new(u16::MAX)).is_none());
    }

    #[test]
    fn test_first_sprite_is_red() {
        let sprite = SpriteSheet::new().resolve(ImageRef::new(1)).unwrap();
        assert_eq!(sprite.tint, (217, 74, 56));
        assert_eq!(sprite.height(), 8);
        assert_eq!(sprite.width(), 9);
    }
}
