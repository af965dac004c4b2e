//! Raw legacy-move shapes as they arrive from the catalog service.
//!
//! The service has shipped two encodings over time:
//!
//! ```text
//! "legacy_moves_by_type": { "3": 77, "4": { "id": 88 }, "5": { "move_id": 91 } }
//! "legacy_moves": [ { "type_id": 3, "move_id": 77 }, { "type": { "id": 4 }, "move": { "id": 88 } } ]
//! ```
//!
//! Both are captured here without interpretation. Every id is kept as a
//! [`RawId`] so that a single bad entry never fails the whole record; the
//! canonical [`LegacyIndex`](super::LegacyIndex) decides what is usable.
use std::collections::BTreeMap;

/// Legacy-move information of one creature detail record, as received.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LegacySource {
    /// `legacy_moves_by_type`: type id → move.
    ByType(BTreeMap<RawId, IdRef>),
    /// `legacy_moves`: flat list of `{type, move}` rows.
    Pairs(Vec<LegacyEntry>),
    /// Neither field was present.
    #[default]
    Absent,
}

impl LegacySource {
    /// Builds a by-type source from well-formed pairs.
    pub fn by_type(pairs: impl IntoIterator<Item = (u32, u32)>) -> Self {
        Self::ByType(
            pairs
                .into_iter()
                .map(|(type_id, move_id)| {
                    (
                        RawId::Int(i64::from(type_id)),
                        IdRef::Bare(RawId::Int(i64::from(move_id))),
                    )
                })
                .collect(),
        )
    }

    /// Builds a flat-list source from well-formed pairs.
    pub fn pairs(pairs: impl IntoIterator<Item = (u32, u32)>) -> Self {
        Self::Pairs(
            pairs
                .into_iter()
                .map(|(type_id, move_id)| {
                    LegacyEntry::Row(LegacyRow {
                        type_id: Some(RawId::Int(i64::from(type_id))),
                        move_id: Some(RawId::Int(i64::from(move_id))),
                        ..LegacyRow::default()
                    })
                })
                .collect(),
        )
    }
}

/// An id as written by the service: a number, a string, or something else.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RawId {
    Int(i64),
    Text(String),
    Malformed,
}

impl RawId {
    /// Resolves to a positive `u32` id, accepting numeric strings.
    pub fn resolve(&self) -> Option<u32> {
        match self {
            RawId::Int(value) => u32::try_from(*value).ok().filter(|id| *id > 0),
            RawId::Text(text) => {
                let text = text.trim();
                let value = text
                    .parse::<u32>()
                    .ok()
                    .or_else(|| integral(text.parse::<f64>().ok()?))?;
                (value > 0).then_some(value)
            }
            RawId::Malformed => None,
        }
    }
}

fn integral(value: f64) -> Option<u32> {
    if value.is_finite() && value.fract() == 0.0 && value >= 0.0 && value <= f64::from(u32::MAX) {
        Some(value as u32)
    } else {
        None
    }
}

/// A reference to a move or type: a bare id or an object carrying one.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum IdRef {
    Object(IdObject),
    Bare(RawId),
}

impl IdRef {
    /// Move id of a by-type value: bare id, else `id`, else `move_id`.
    pub fn move_id(&self) -> Option<u32> {
        match self {
            IdRef::Bare(raw) => raw.resolve(),
            IdRef::Object(object) => object
                .id
                .as_ref()
                .and_then(RawId::resolve)
                .or_else(|| object.move_id.as_ref().and_then(RawId::resolve)),
        }
    }

    /// Id of a nested `{ "id": .. }` object. Bare values carry no nested id.
    pub fn nested_id(&self) -> Option<u32> {
        match self {
            IdRef::Object(object) => object.id.as_ref().and_then(RawId::resolve),
            IdRef::Bare(_) => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IdObject {
    pub id: Option<RawId>,
    pub move_id: Option<RawId>,
}

/// One element of the flat-list shape.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum LegacyEntry {
    Row(LegacyRow),
    Malformed(RawId),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LegacyRow {
    pub type_id: Option<RawId>,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub type_ref: Option<IdRef>,
    pub move_id: Option<RawId>,
    #[cfg_attr(feature = "serde", serde(rename = "move"))]
    pub move_ref: Option<IdRef>,
}

impl LegacyRow {
    /// `type_id`, falling back to `type.id` only when `type_id` is absent.
    pub fn type_id(&self) -> Option<u32> {
        match &self.type_id {
            Some(raw) => raw.resolve(),
            None => self.type_ref.as_ref().and_then(IdRef::nested_id),
        }
    }

    /// `move_id`, falling back to `move.id` only when `move_id` is absent.
    pub fn move_id(&self) -> Option<u32> {
        match &self.move_id {
            Some(raw) => raw.resolve(),
            None => self.move_ref.as_ref().and_then(IdRef::nested_id),
        }
    }
}

#[cfg(feature = "serde")]
mod de {
    use std::fmt;

    use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};

    use super::RawId;

    impl<'de> serde::Deserialize<'de> for RawId {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(RawIdVisitor)
        }
    }

    /// Accepts any value; anything that is not a number or string is `Malformed`.
    struct RawIdVisitor;

    impl<'de> Visitor<'de> for RawIdVisitor {
        type Value = RawId;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an id")
        }

        fn visit_bool<E: de::Error>(self, _: bool) -> Result<RawId, E> {
            Ok(RawId::Malformed)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<RawId, E> {
            Ok(RawId::Int(value))
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<RawId, E> {
            Ok(i64::try_from(value).map_or(RawId::Malformed, RawId::Int))
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<RawId, E> {
            Ok(super::integral(value).map_or(RawId::Malformed, |id| RawId::Int(i64::from(id))))
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<RawId, E> {
            Ok(RawId::Text(value.to_owned()))
        }

        fn visit_bytes<E: de::Error>(self, _: &[u8]) -> Result<RawId, E> {
            Ok(RawId::Malformed)
        }

        fn visit_none<E: de::Error>(self) -> Result<RawId, E> {
            Ok(RawId::Malformed)
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<RawId, D::Error> {
            deserializer.deserialize_any(self)
        }

        fn visit_unit<E: de::Error>(self) -> Result<RawId, E> {
            Ok(RawId::Malformed)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RawId, A::Error> {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(RawId::Malformed)
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawId, A::Error> {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(RawId::Malformed)
        }
    }
}
