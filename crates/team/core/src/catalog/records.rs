use crate::ids::{ElementId, MagicItemId, MonsterId, MoveId, PersonalityId};
use crate::legacy::LegacySource;

/// Catalog entry for a creature, as listed in the picker.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Creature {
    pub id: MonsterId,
    pub name: String,
}

/// A learnable move.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub id: MoveId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub move_type: Option<ElementType>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub energy_cost: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub power: Option<u32>,
}

impl Move {
    pub fn new(id: MoveId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            move_type: None,
            energy_cost: None,
            power: None,
        }
    }
}

/// Personality with its stat modifiers in percent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Personality {
    pub id: PersonalityId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hp_mod_pct: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub phy_atk_mod_pct: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mag_atk_mod_pct: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub phy_def_mod_pct: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mag_def_mod_pct: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub spd_mod_pct: f32,
}

/// Elemental type. A slot's legacy type is one of these.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementType {
    pub id: ElementId,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MagicItem {
    pub id: MagicItemId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
}

/// Per-creature detail: ordinary move pool and legacy-move table.
///
/// On the wire the legacy table arrives as either `legacy_moves_by_type` or
/// `legacy_moves`; when both are present the by-type map is kept.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "wire::CreatureDetailWire"))]
pub struct CreatureDetail {
    pub id: MonsterId,
    /// Ordinary moves in catalog order.
    pub move_pool: Vec<Move>,
    pub legacy_moves: LegacySource,
}

impl CreatureDetail {
    pub fn new(id: MonsterId, move_pool: Vec<Move>, legacy_moves: LegacySource) -> Self {
        Self {
            id,
            move_pool,
            legacy_moves,
        }
    }
}

#[cfg(feature = "serde")]
mod wire {
    use std::collections::BTreeMap;

    use super::*;
    use crate::legacy::{IdRef, LegacyEntry, RawId};

    #[derive(serde::Deserialize)]
    pub(super) struct CreatureDetailWire {
        #[serde(default)]
        id: MonsterId,
        #[serde(default)]
        move_pool: Vec<Move>,
        #[serde(default)]
        legacy_moves_by_type: Option<BTreeMap<RawId, IdRef>>,
        #[serde(default)]
        legacy_moves: Option<Vec<LegacyEntry>>,
    }

    impl From<CreatureDetailWire> for CreatureDetail {
        fn from(wire: CreatureDetailWire) -> Self {
            let legacy_moves = match (wire.legacy_moves_by_type, wire.legacy_moves) {
                (Some(map), _) => LegacySource::ByType(map),
                (None, Some(list)) => LegacySource::Pairs(list),
                (None, None) => LegacySource::Absent,
            };
            Self {
                id: wire.id,
                move_pool: wire.move_pool,
                legacy_moves,
            }
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use crate::ids::ElementId;
    use crate::legacy::extract_legacy_info;

    #[test]
    fn by_type_map_wins_over_the_list() {
        let detail: CreatureDetail = serde_json::from_value(serde_json::json!({
            "id": 5,
            "move_pool": [{"id": 10, "name": "Tackle"}],
            "legacy_moves_by_type": {"3": 77},
            "legacy_moves": [{"type_id": 4, "move_id": 88}]
        }))
        .unwrap();

        let index = extract_legacy_info(&detail);

        assert_eq!(detail.move_pool.len(), 1);
        assert_eq!(index.move_for_type(ElementId(3)), Some(MoveId(77)));
        assert_eq!(index.move_for_type(ElementId(4)), None);
    }

    #[test]
    fn wire_shapes_normalize_identically() {
        let by_type: CreatureDetail = serde_json::from_value(serde_json::json!({
            "id": 5,
            "legacy_moves_by_type": {"3": 77, "4": {"id": 88}, "5": {"move_id": "91"}}
        }))
        .unwrap();
        let pairs: CreatureDetail = serde_json::from_value(serde_json::json!({
            "id": 5,
            "legacy_moves": [
                {"type_id": 3, "move_id": 77},
                {"type": {"id": 4}, "move": {"id": 88}},
                {"type_id": "5", "move": {"id": 91}},
                {"type_id": 6},
                "garbage"
            ]
        }))
        .unwrap();

        let left = extract_legacy_info(&by_type);
        let right = extract_legacy_info(&pairs);

        assert_eq!(left.moves().collect::<Vec<_>>(), right.moves().collect::<Vec<_>>());
        assert_eq!(left.len(), 3);
        assert_eq!(right.skipped(), 2);
    }

    #[test]
    fn missing_legacy_fields_are_absent() {
        let detail: CreatureDetail =
            serde_json::from_value(serde_json::json!({"id": 2, "move_pool": []})).unwrap();

        assert_eq!(detail.legacy_moves, LegacySource::Absent);
    }
}
