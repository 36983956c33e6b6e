//! Detail view model and visibility rules.

use std::sync::Arc;

use tracing::debug;

use crate::application::dto::ResolvedDetail;
use crate::domain::entities::{Sprite, TextRef};
use crate::domain::notification::Notification;
use crate::domain::ports::{ImageResolver, TextResolver};
use crate::domain::settings::Locale;

const CHARACTERISTIC_LABELS: [TextRef; 3] = [
    TextRef::from_static("label_characteristic1"),
    TextRef::from_static("label_characteristic2"),
    TextRef::from_static("label_characteristic3"),
];
const SELECTED_NOTICE: TextRef = TextRef::from_static("selected_notice");

/// Placeholder replaced with the creature name in the selection notice.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Returns whether an optional text gets a row in the detail view.
///
/// Empty and whitespace-only texts are hidden together with their label.
#[must_use]
pub fn is_visible(text: &str) -> bool {
    !text.trim().is_empty()
}

/// One of the three optional characteristic rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacteristicRow {
    /// Slot number, 1 to 3.
    pub slot: usize,
    /// Localized caption.
    pub label: String,
    /// Resolved text.
    pub value: String,
    /// Whether the row is drawn at all.
    pub visible: bool,
}

/// Read-only habitat check box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitatIndicator {
    /// Localized habitat name.
    pub label: String,
    /// Whether the creature has this habitat.
    pub checked: bool,
}

/// Everything the detail screen draws.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct DetailViewModel {
    pub name: String,
    pub family: String,
    pub scientific_name: String,
    pub description: String,
    pub habitats: [HabitatIndicator; 3],
    pub characteristics: [CharacteristicRow; 3],
    pub sprite: Option<Sprite>,
}

impl DetailViewModel {
    /// Characteristic rows that take up space on screen.
    pub fn visible_characteristics(&self) -> impl Iterator<Item = &CharacteristicRow> {
        self.characteristics.iter().filter(|row| row.visible)
    }
}

/// View model plus the one-shot notice of a detail activation.
#[derive(Debug, Clone)]
pub struct DetailActivation {
    /// Rendered view model.
    pub view: DetailViewModel,
    /// Notice announcing the selection.
    pub notice: Notification,
}

/// Builds detail view models for one locale.
///
/// Labels and the notice are resolved in the presenter's locale; the
/// creature texts arrive already resolved in a [`ResolvedDetail`].
pub struct DetailPresenter {
    text: Arc<dyn TextResolver>,
    images: Arc<dyn ImageResolver>,
    locale: Locale,
}

impl DetailPresenter {
    /// Creates a presenter resolving labels in `locale`.
    #[must_use]
    pub fn new(
        text: Arc<dyn TextResolver>,
        images: Arc<dyn ImageResolver>,
        locale: Locale,
    ) -> Self {
        Self {
            text,
            images,
            locale,
        }
    }

    fn label(&self, key: &'static str) -> String {
        self.text.resolve(&TextRef::from_static(key), self.locale)
    }

    /// Builds the view model, applying the visibility rule to every slot.
    #[must_use]
    pub fn render(&self, detail: &ResolvedDetail) -> DetailViewModel {
        let characteristics = std::array::from_fn(|slot| {
            let value = detail.characteristics[slot].clone();
            CharacteristicRow {
                slot: slot + 1,
                label: self.text.resolve(&CHARACTERISTIC_LABELS[slot], self.locale),
                visible: is_visible(&value),
                value,
            }
        });

        let habitats = [
            HabitatIndicator {
                label: self.label("label_terrestrial"),
                checked: detail.habitat.is_terrestrial(),
            },
            HabitatIndicator {
                label: self.label("label_aquatic"),
                checked: detail.habitat.is_aquatic(),
            },
            HabitatIndicator {
                label: self.label("label_aerial"),
                checked: detail.habitat.is_aerial(),
            },
        ];

        DetailViewModel {
            name: detail.name.clone(),
            family: detail.family.clone(),
            scientific_name: detail.scientific_name.clone(),
            description: detail.description.clone(),
            habitats,
            characteristics,
            sprite: self.images.resolve(detail.image),
        }
    }

    /// Renders `detail` and builds the notice announcing the selection.
    ///
    /// Call once per time the detail view is opened.
    #[must_use]
    pub fn activate(&self, detail: &ResolvedDetail) -> DetailActivation {
        let view = self.render(detail);
        let message = self
            .text
            .resolve(&SELECTED_NOTICE, self.locale)
            .replace(NAME_PLACEHOLDER, &detail.name);
        debug!(name = %detail.name, "Detail view activated");

        DetailActivation {
            view,
            notice: Notification::info(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::SelectionPayload;
    use crate::domain::catalog::list_entities;
    use crate::domain::entities::{Habitat, ImageRef};
    use crate::domain::ports::{MockImageResolver, MockTextResolver};
    use test_case::test_case;

    fn presenter() -> DetailPresenter {
        let mut text = MockTextResolver::new();
        text.expect_resolve()
            .returning(|reference, _| match reference.key() {
                "selected_notice" => "Selected: {name}".to_string(),
                "char3_red_pikmin" => String::new(),
                key => key.to_string(),
            });
        let mut images = MockImageResolver::new();
        images.expect_resolve().return_const(None::<Sprite>);

        DetailPresenter::new(Arc::new(text), Arc::new(images), Locale::En)
    }

    #[test_case("", false ; "empty")]
    #[test_case("   ", false ; "spaces")]
    #[test_case("\t\n", false ; "other_whitespace")]
    #[test_case("a", true ; "single_char")]
    #[test_case("  a  ", true ; "padded")]
    fn test_visibility(text: &str, expected: bool) {
        assert_eq!(is_visible(text), expected);
    }

    #[test_case(0 ; "slot_1")]
    #[test_case(1 ; "slot_2")]
    #[test_case(2 ; "slot_3")]
    fn test_visibility_is_the_same_for_every_slot(slot: usize) {
        for (text, expected) in [("", false), ("   ", false), ("a", true)] {
            let mut detail = ResolvedDetail {
                characteristics: ["x".into(), "x".into(), "x".into()],
                ..ResolvedDetail::default()
            };
            detail.characteristics[slot] = text.to_string();

            let view = presenter().render(&detail);

            assert_eq!(view.characteristics[slot].visible, expected);
            assert_eq!(view.characteristics[slot].slot, slot + 1);
            assert_eq!(view.visible_characteristics().count(), 2 + usize::from(expected));
        }
    }

    #[test]
    fn test_red_pikmin_selection_flow() {
        let presenter = presenter();
        let payload = SelectionPayload::pack(&list_entities()[0]);
        let detail = payload.unpack(presenter.text.as_ref(), Locale::En);

        let view = presenter.render(&detail);

        assert!(view.characteristics[0].visible);
        assert!(view.characteristics[1].visible);
        assert!(!view.characteristics[2].visible);
        assert!(view.habitats[0].checked);
        assert!(!view.habitats[1].checked);
        assert!(!view.habitats[2].checked);
    }

    #[test_case(Habitat::empty() ; "none")]
    #[test_case(Habitat::all() ; "all")]
    #[test_case(Habitat::AQUATIC | Habitat::AERIAL ; "water_and_air")]
    fn test_habitat_indicators_follow_flags(habitat: Habitat) {
        let detail = ResolvedDetail {
            habitat,
            ..ResolvedDetail::default()
        };

        let view = presenter().render(&detail);

        assert_eq!(view.habitats[0].checked, habitat.is_terrestrial());
        assert_eq!(view.habitats[1].checked, habitat.is_aquatic());
        assert_eq!(view.habitats[2].checked, habitat.is_aerial());
        assert_eq!(view.habitats[1].label, "label_aquatic");
    }

    #[test]
    fn test_empty_detail_renders() {
        let view = presenter().render(&ResolvedDetail::default());

        assert_eq!(view.visible_characteristics().count(), 0);
        assert!(view.sprite.is_none());
        assert!(view.name.is_empty());
    }

    #[test]
    fn test_activation_announces_name() {
        let detail = ResolvedDetail {
            name: "Red Pikmin".into(),
            image: ImageRef::new(1),
            ..ResolvedDetail::default()
        };

        let activation = presenter().activate(&detail);

        assert_eq!(activation.notice.message, "Selected: Red Pikmin");
        assert_eq!(activation.view.name, "Red Pikmin");
    }
}
