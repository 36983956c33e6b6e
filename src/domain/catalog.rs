//! Static creature catalog.
//!
//! The catalog is fixed at build time. A creature's identity is its index and
//! the slice order is the order the grid displays.

use crate::domain::entities::{CatalogKeys, Creature, Habitat, ImageRef};

/// Number of creatures in the catalog.
pub const CATALOG_LEN: usize = 23;

/// Every catalog entry is recorded as a land dweller.
const LAND: Habitat = Habitat::TERRESTRIAL;

macro_rules! creature {
    ($key:ident, $image:literal) => {
        Creature::catalog_entry(
            CatalogKeys {
                name: stringify!($key),
                family: concat!("fam_", stringify!($key)),
                scientific_name: concat!("cn_", stringify!($key)),
                description: concat!("desc_", stringify!($key)),
                characteristics: [
                    concat!("char1_", stringify!($key)),
                    concat!("char2_", stringify!($key)),
                    concat!("char3_", stringify!($key)),
                ],
            },
            LAND,
            ImageRef::new($image),
        )
    };
}

static CATALOG: [Creature; CATALOG_LEN] = [
    creature!(red_pikmin, 1),
    creature!(yellow_pikmin, 2),
    creature!(blue_pikmin, 3),
    creature!(white_pikmin, 4),
    creature!(purple_pikmin, 5),
    creature!(rock_pikmin, 6),
    creature!(winged_pikmin, 7),
    creature!(ice_pikmin, 8),
    creature!(glow_pikmin, 9),
    creature!(bulborb, 10),
    creature!(joustmite, 11),
    creature!(skitter_leaf, 12),
    creature!(skutterchuck, 13),
    creature!(pyroclasmic_slooch, 14),
    creature!(bearded_amprat, 15),
    creature!(empress_bulblax, 16),
    creature!(waterwraith, 17),
    creature!(lumiknoll, 18),
    creature!(peckish_aristocrab, 19),
    creature!(puckering_blinnow, 20),
    creature!(skeeterskate, 21),
    creature!(toady_bloyster, 22),
    creature!(waddlepus, 23),
];

/// Returns every creature in display order.
#[must_use]
pub fn list_entities() -> &'static [Creature] {
    &CATALOG
}

/// Returns the creature at `index`, if any.
#[must_use]
pub fn creature_at(index: usize) -> Option<&'static Creature> {
    CATALOG.get(index)
}
