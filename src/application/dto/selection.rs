//! Selection transfer between the list and the detail view.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::domain::entities::{Creature, Habitat, ImageRef, TextRef};
use crate::domain::errors::TransferError;
use crate::domain::ports::TextResolver;
use crate::domain::settings::Locale;

/// Payload keys, one per creature field.
pub mod keys {
    /// Display name key.
    pub const NAME: &str = "name";
    /// Family key.
    pub const FAMILY: &str = "family";
    /// Scientific name key.
    pub const SCIENTIFIC_NAME: &str = "scientific_name";
    /// Land habitat flag.
    pub const IS_TERRESTRIAL: &str = "is_terrestrial";
    /// Water habitat flag.
    pub const IS_AQUATIC: &str = "is_aquatic";
    /// Air habitat flag.
    pub const IS_AERIAL: &str = "is_aerial";
    /// Description key.
    pub const DESCRIPTION: &str = "description";
    /// First characteristic key.
    pub const CHARACTERISTIC1: &str = "characteristic1";
    /// Second characteristic key.
    pub const CHARACTERISTIC2: &str = "characteristic2";
    /// Third characteristic key.
    pub const CHARACTERISTIC3: &str = "characteristic3";
    /// Image id.
    pub const IMAGE: &str = "image";

    /// Characteristic keys in slot order.
    pub const CHARACTERISTICS: [&str; 3] = [CHARACTERISTIC1, CHARACTERISTIC2, CHARACTERISTIC3];

    /// Every key a packed payload carries.
    pub const ALL: [&str; 11] = [
        NAME,
        FAMILY,
        SCIENTIFIC_NAME,
        IS_TERRESTRIAL,
        IS_AQUATIC,
        IS_AERIAL,
        DESCRIPTION,
        CHARACTERISTIC1,
        CHARACTERISTIC2,
        CHARACTERISTIC3,
        IMAGE,
    ];
}

/// Scalar value stored under a payload key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PayloadValue {
    /// Boolean field.
    Flag(bool),
    /// Unsigned integer field.
    Number(u64),
    /// Text reference key.
    Text(String),
}

impl PayloadValue {
    /// Converts a decoded JSON value. Values of any other shape (negative or
    /// fractional numbers, `null`, arrays, objects) have no payload form.
    #[must_use]
    pub fn from_json_value(value: Value) -> Option<Self> {
        match value {
            Value::Bool(flag) => Some(Self::Flag(flag)),
            Value::Number(number) => number.as_u64().map(Self::Number),
            Value::String(text) => Some(Self::Text(text)),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

/// Flat copy of one creature's fields.
///
/// Fields are copied by value, so the payload stays valid regardless of what
/// happens to the list that produced it. Reading is lenient: an absent key
/// or a value of the wrong type yields that field's default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectionPayload {
    fields: BTreeMap<String, PayloadValue>,
}

impl SelectionPayload {
    /// Creates an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies every field of `creature` into a new payload.
    #[must_use]
    pub fn pack(creature: &Creature) -> Self {
        let habitat = creature.habitat();
        let [first, second, third] = creature.characteristics();

        let mut payload = Self::new();
        payload
            .put_text(keys::NAME, creature.name())
            .put_text(keys::FAMILY, creature.family())
            .put_text(keys::SCIENTIFIC_NAME, creature.scientific_name())
            .put_flag(keys::IS_TERRESTRIAL, habitat.is_terrestrial())
            .put_flag(keys::IS_AQUATIC, habitat.is_aquatic())
            .put_flag(keys::IS_AERIAL, habitat.is_aerial())
            .put_text(keys::DESCRIPTION, creature.description())
            .put_text(keys::CHARACTERISTIC1, first)
            .put_text(keys::CHARACTERISTIC2, second)
            .put_text(keys::CHARACTERISTIC3, third)
            .insert(keys::IMAGE, PayloadValue::Number(u64::from(creature.image().id())));
        payload
    }

    /// Stores a raw value under `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: PayloadValue) -> &mut Self {
        self.fields.insert(key.into(), value);
        self
    }

    fn put_text(&mut self, key: &str, reference: &TextRef) -> &mut Self {
        self.insert(key, PayloadValue::Text(reference.key().to_string()))
    }

    fn put_flag(&mut self, key: &str, value: bool) -> &mut Self {
        self.insert(key, PayloadValue::Flag(value))
    }

    /// Returns the raw value under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PayloadValue> {
        self.fields.get(key)
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no key is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Reads a text reference, defaulting to [`TextRef::EMPTY`].
    #[must_use]
    pub fn text(&self, key: &str) -> TextRef {
        match self.fields.get(key) {
            Some(PayloadValue::Text(value)) => TextRef::new(value.clone()),
            _ => TextRef::EMPTY,
        }
    }

    /// Reads a flag, defaulting to `false`.
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.fields.get(key), Some(PayloadValue::Flag(true)))
    }

    /// Reads an image reference, defaulting to [`ImageRef::NONE`].
    #[must_use]
    pub fn image(&self, key: &str) -> ImageRef {
        match self.fields.get(key) {
            Some(PayloadValue::Number(id)) => {
                u16::try_from(*id).map_or(ImageRef::NONE, ImageRef::new)
            }
            _ => ImageRef::NONE,
        }
    }

    /// Resolves every text field in `locale`.
    ///
    /// Resolution happens here rather than at pack time, so a locale change
    /// between selecting and displaying is honored.
    #[must_use]
    pub fn unpack(&self, resolver: &dyn TextResolver, locale: Locale) -> ResolvedDetail {
        let resolve = |key: &str| {
            let reference = self.text(key);
            if reference.is_empty() {
                String::new()
            } else {
                resolver.resolve(&reference, locale)
            }
        };

        ResolvedDetail {
            name: resolve(keys::NAME),
            family: resolve(keys::FAMILY),
            scientific_name: resolve(keys::SCIENTIFIC_NAME),
            habitat: Habitat::from_flags(
                self.flag(keys::IS_TERRESTRIAL),
                self.flag(keys::IS_AQUATIC),
                self.flag(keys::IS_AERIAL),
            ),
            description: resolve(keys::DESCRIPTION),
            characteristics: keys::CHARACTERISTICS.map(resolve),
            image: self.image(keys::IMAGE),
        }
    }

    /// Encodes the payload as a JSON object.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_json(&self) -> Result<String, TransferError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a payload from a JSON object.
    ///
    /// Fields whose value has no payload form are dropped, so reading them
    /// yields the field default.
    ///
    /// # Errors
    /// Returns error if `input` is not a JSON object.
    pub fn from_json(input: &str) -> Result<Self, TransferError> {
        Ok(serde_json::from_str(input)?)
    }
}

impl From<BTreeMap<String, Value>> for SelectionPayload {
    fn from(object: BTreeMap<String, Value>) -> Self {
        let fields = object
            .into_iter()
            .filter_map(|(key, value)| match PayloadValue::from_json_value(value) {
                Some(value) => Some((key, value)),
                None => {
                    debug!(%key, "Dropping payload field with unsupported value");
                    None
                }
            })
            .collect();

        Self { fields }
    }
}

impl<'de> Deserialize<'de> for SelectionPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        BTreeMap::<String, Value>::deserialize(deserializer).map(Self::from)
    }
}

impl From<&Creature> for SelectionPayload {
    fn from(creature: &Creature) -> Self {
        Self::pack(creature)
    }
}

/// Creature fields with every text resolved for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedDetail {
    /// Display name.
    pub name: String,
    /// Family.
    pub family: String,
    /// Scientific name.
    pub scientific_name: String,
    /// Habitat flags.
    pub habitat: Habitat,
    /// Description.
    pub description: String,
    /// Characteristics in slot order, possibly blank.
    pub characteristics: [String; 3],
    /// Sprite reference.
    pub image: ImageRef,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::list_entities;
    use crate::domain::ports::MockTextResolver;
    use test_case::test_case;

    /// Resolver that echoes the key with a locale prefix.
    struct EchoResolver;

    impl TextResolver for EchoResolver {
        fn resolve(&self, reference: &TextRef, locale: Locale) -> String {
            format!("{locale}:{}", reference.key())
        }
    }

    #[test]
    fn test_pack_carries_every_field() {
        let payload = SelectionPayload::pack(&list_entities()[0]);

        assert_eq!(payload.len(), keys::ALL.len());
        for key in keys::ALL {
            assert!(payload.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(payload.get(keys::NAME), Some(&PayloadValue::Text("red_pikmin".into())));
        assert_eq!(payload.get(keys::IMAGE), Some(&PayloadValue::Number(1)));
    }

    #[test]
    fn test_unpack_matches_direct_resolution_for_whole_catalog() {
        for locale in Locale::ALL {
            for creature in list_entities() {
                let detail = SelectionPayload::pack(creature).unpack(&EchoResolver, locale);

                assert_eq!(detail.name, EchoResolver.resolve(creature.name(), locale));
                assert_eq!(detail.family, EchoResolver.resolve(creature.family(), locale));
                assert_eq!(
                    detail.scientific_name,
                    EchoResolver.resolve(creature.scientific_name(), locale)
                );
                assert_eq!(
                    detail.description,
                    EchoResolver.resolve(creature.description(), locale)
                );
                for (slot, reference) in creature.characteristics().iter().enumerate() {
                    assert_eq!(
                        detail.characteristics[slot],
                        EchoResolver.resolve(reference, locale)
                    );
                }
                assert_eq!(detail.habitat, creature.habitat());
                assert_eq!(detail.image, creature.image());
            }
        }
    }

    #[test]
    fn test_empty_payload_unpacks_to_defaults() {
        let mut resolver = MockTextResolver::new();
        resolver.expect_resolve().never();

        let detail = SelectionPayload::new().unpack(&resolver, Locale::Es);

        assert_eq!(detail, ResolvedDetail::default());
        assert!(detail.habitat.is_empty());
        assert!(detail.image.is_none());
        assert!(detail.characteristics.iter().all(String::is_empty));
    }

    #[test]
    fn test_mistyped_fields_fall_back_to_defaults() {
        let mut payload = SelectionPayload::new();
        payload
            .insert(keys::NAME, PayloadValue::Flag(true))
            .insert(keys::IS_AQUATIC, PayloadValue::Text("yes".into()))
            .insert(keys::IMAGE, PayloadValue::Number(u64::from(u16::MAX) + 1));

        assert_eq!(payload.text(keys::NAME), TextRef::EMPTY);
        assert!(!payload.flag(keys::IS_AQUATIC));
        assert_eq!(payload.image(keys::IMAGE), ImageRef::NONE);
    }

    #[test]
    fn test_text_resolved_in_locale_at_unpack_time() {
        let payload = SelectionPayload::pack(&list_entities()[0]);

        let mut resolver = MockTextResolver::new();
        resolver
            .expect_resolve()
            .withf(|_, locale| *locale == Locale::En)
            .returning(|reference, _| format!("en {}", reference.key()));

        let detail = payload.unpack(&resolver, Locale::En);
        assert_eq!(detail.name, "en red_pikmin");
    }

    #[test]
    fn test_json_wire_form() {
        let payload = SelectionPayload::pack(&list_entities()[2]);
        let json = payload.to_json().unwrap();

        assert!(json.contains(r#""is_terrestrial":true"#));
        assert!(json.contains(r#""is_aquatic":false"#));
        assert_eq!(SelectionPayload::from_json(&json).unwrap(), payload);
        assert!(SelectionPayload::from_json("{}").unwrap().is_empty());
        assert!(SelectionPayload::from_json("[1, 2").is_err());
    }

    #[test_case(r#"{"image": -1}"# ; "negative_number")]
    #[test_case(r#"{"image": 1.5}"# ; "fractional_number")]
    #[test_case(r#"{"name": null}"# ; "null_text")]
    #[test_case(r#"{"is_aquatic": {}}"# ; "nested_object")]
    #[test_case(r#"{"characteristic1": ["a"]}"# ; "array")]
    fn test_unsupported_json_value_reads_as_default(input: &str) {
        let payload = SelectionPayload::from_json(input).unwrap();

        assert!(payload.is_empty());
        assert_eq!(payload.image(keys::IMAGE), ImageRef::NONE);
        assert_eq!(payload.text(keys::NAME), TextRef::EMPTY);
        assert!(!payload.flag(keys::IS_AQUATIC));
    }

    #[test]
    fn test_unsupported_value_keeps_other_fields() {
        let payload = SelectionPayload::from_json(
            r#"{"name": "red_pikmin", "image": -1, "is_terrestrial": true, "family": null}"#,
        )
        .unwrap();

        assert_eq!(payload.len(), 2);
        assert_eq!(payload.text(keys::NAME), TextRef::new("red_pikmin"));
        assert!(payload.flag(keys::IS_TERRESTRIAL));
        assert_eq!(payload.image(keys::IMAGE), ImageRef::NONE);
        assert_eq!(payload.text(keys::FAMILY), TextRef::EMPTY);
    }

    #[test_case("[]" ; "array")]
    #[test_case("null" ; "null")]
    #[test_case("42" ; "number")]
    #[test_case(r#"{"name": "#; "truncated")]
    fn test_non_object_input_is_an_error(input: &str) {
        assert!(matches!(
            SelectionPayload::from_json(input),
            Err(TransferError::Malformed(_))
        ));
    }
}
