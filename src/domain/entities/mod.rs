//! Domain entity definitions.

mod creature;
mod reference;
mod sprite;

pub use creature::{CatalogKeys, Creature, Habitat};
pub use reference::{ImageRef, TextRef};
pub use sprite::Sprite;
