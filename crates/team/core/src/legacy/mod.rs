//! Canonical legacy-move index.
//!
//! A creature may learn exactly one legacy move per element type. The catalog
//! describes these in one of two shapes (see [`LegacySource`]); this module
//! normalizes either into a [`LegacyIndex`] that the engine queries.
mod source;

pub use source::{IdObject, IdRef, LegacyEntry, LegacyRow, LegacySource, RawId};

use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::CreatureDetail;
use crate::ids::{ElementId, MoveId};

/// Bidirectional type ↔ legacy move lookup for one creature.
///
/// Every move in [`LegacyIndex::ids`] is the value of some type entry, so the
/// two directions always agree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LegacyIndex {
    by_type: BTreeMap<ElementId, MoveId>,
    ids: BTreeSet<MoveId>,
    skipped: usize,
}

impl LegacyIndex {
    /// An index with no legacy moves.
    pub const fn new() -> Self {
        Self {
            by_type: BTreeMap::new(),
            ids: BTreeSet::new(),
            skipped: 0,
        }
    }

    /// Builds an index from already-validated pairs. Later pairs overwrite
    /// earlier ones for the same type.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (ElementId, MoveId)>) -> Self {
        let mut index = Self::new();
        for (type_id, move_id) in pairs {
            index.insert(type_id, move_id);
        }
        index
    }

    /// Normalizes a raw source. Entries whose type or move does not resolve
    /// to a positive id are counted in [`LegacyIndex::skipped`] and dropped.
    pub fn from_source(source: &LegacySource) -> Self {
        let mut index = Self::new();
        match source {
            LegacySource::ByType(map) => {
                for (raw_type, raw_move) in map {
                    index.accept(raw_type.resolve(), raw_move.move_id());
                }
            }
            LegacySource::Pairs(entries) => {
                for entry in entries {
                    match entry {
                        LegacyEntry::Row(row) => index.accept(row.type_id(), row.move_id()),
                        LegacyEntry::Malformed(_) => index.skipped += 1,
                    }
                }
            }
            LegacySource::Absent => {}
        }
        index
    }

    fn accept(&mut self, type_id: Option<u32>, move_id: Option<u32>) {
        match (type_id, move_id) {
            (Some(type_id), Some(move_id)) => self.insert(ElementId(type_id), MoveId(move_id)),
            _ => self.skipped += 1,
        }
    }

    fn insert(&mut self, type_id: ElementId, move_id: MoveId) {
        if !type_id.is_set() || !move_id.is_set() {
            self.skipped += 1;
            return;
        }
        if let Some(replaced) = self.by_type.insert(type_id, move_id) {
            if !self.by_type.values().any(|held| *held == replaced) {
                self.ids.remove(&replaced);
            }
        }
        self.ids.insert(move_id);
    }

    /// The legacy move unlocked by `type_id`.
    #[inline]
    pub fn move_for_type(&self, type_id: ElementId) -> Option<MoveId> {
        self.by_type.get(&type_id).copied()
    }

    /// The type that unlocks `move_id`. When several types map to the same
    /// move, the lowest type id wins.
    pub fn type_for_move(&self, move_id: MoveId) -> Option<ElementId> {
        self.by_type
            .iter()
            .find(|(_, held)| **held == move_id)
            .map(|(type_id, _)| *type_id)
    }

    #[inline]
    pub fn contains(&self, move_id: MoveId) -> bool {
        self.ids.contains(&move_id)
    }

    /// `(type, move)` pairs in ascending type order.
    pub fn moves(&self) -> impl Iterator<Item = (ElementId, MoveId)> + '_ {
        self.by_type.iter().map(|(type_id, move_id)| (*type_id, *move_id))
    }

    /// Distinct legacy move ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = MoveId> + '_ {
        self.ids.iter().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.by_type.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }

    /// Number of raw entries dropped while normalizing.
    #[inline]
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

/// Extracts the legacy index of a creature detail record.
///
/// `legacy_moves_by_type` takes precedence over `legacy_moves` when both are
/// present; that choice is made when the record is decoded.
pub fn extract_legacy_info(detail: &CreatureDetail) -> LegacyIndex {
    LegacyIndex::from_source(&detail.legacy_moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::MonsterId;

    fn detail(legacy_moves: LegacySource) -> CreatureDetail {
        CreatureDetail {
            id: MonsterId(1),
            move_pool: Vec::new(),
            legacy_moves,
        }
    }

    #[test]
    fn both_shapes_produce_the_same_index() {
        let by_type = extract_legacy_info(&detail(LegacySource::by_type([(3, 77), (4, 88)])));
        let pairs = extract_legacy_info(&detail(LegacySource::pairs([(4, 88), (3, 77)])));

        assert_eq!(by_type, pairs);
        assert_eq!(by_type.move_for_type(ElementId(3)), Some(MoveId(77)));
        assert_eq!(by_type.type_for_move(MoveId(88)), Some(ElementId(4)));
        assert!(by_type.contains(MoveId(77)));
        assert!(!by_type.contains(MoveId(12)));
    }

    #[test]
    fn absent_source_yields_an_empty_index() {
        let index = extract_legacy_info(&detail(LegacySource::Absent));

        assert!(index.is_empty());
        assert_eq!(index.moves().count(), 0);
        assert_eq!(index.skipped(), 0);
    }

    #[test]
    fn unresolvable_entries_are_skipped() {
        let source = LegacySource::Pairs(vec![
            LegacyEntry::Row(LegacyRow {
                type_id: Some(RawId::Text("3".into())),
                move_id: Some(RawId::Int(77)),
                ..LegacyRow::default()
            }),
            LegacyEntry::Row(LegacyRow {
                type_id: Some(RawId::Int(0)),
                move_id: Some(RawId::Int(55)),
                ..LegacyRow::default()
            }),
            LegacyEntry::Row(LegacyRow {
                type_id: Some(RawId::Int(5)),
                move_id: Some(RawId::Text("soon".into())),
                ..LegacyRow::default()
            }),
            LegacyEntry::Malformed(RawId::Malformed),
        ]);

        let index = LegacyIndex::from_source(&source);

        assert_eq!(index.moves().collect::<Vec<_>>(), vec![(ElementId(3), MoveId(77))]);
        assert_eq!(index.skipped(), 3);
    }

    #[test]
    fn last_row_for_a_type_wins_and_ids_stay_consistent() {
        let index = LegacyIndex::from_source(&LegacySource::pairs([(3, 77), (3, 78)]));

        assert_eq!(index.move_for_type(ElementId(3)), Some(MoveId(78)));
        assert!(!index.contains(MoveId(77)));
        assert_eq!(index.ids().collect::<Vec<_>>(), vec![MoveId(78)]);
    }

    #[test]
    fn shared_move_resolves_to_the_lowest_type() {
        let index = LegacyIndex::from_pairs([
            (ElementId(9), MoveId(40)),
            (ElementId(2), MoveId(40)),
        ]);

        assert_eq!(index.type_for_move(MoveId(40)), Some(ElementId(2)));
        assert_eq!(index.len(), 2);
        assert_eq!(index.ids().count(), 1);
    }

    #[test]
    fn by_type_values_accept_objects() {
        let mut map = BTreeMap::new();
        map.insert(
            RawId::Text("4".into()),
            IdRef::Object(IdObject {
                id: None,
                move_id: Some(RawId::Int(88)),
            }),
        );
        map.insert(
            RawId::Text("5".into()),
            IdRef::Object(IdObject {
                id: Some(RawId::Int(91)),
                move_id: Some(RawId::Int(1)),
            }),
        );

        let index = LegacyIndex::from_source(&LegacySource::ByType(map));

        assert_eq!(index.move_for_type(ElementId(4)), Some(MoveId(88)));
        assert_eq!(index.move_for_type(ElementId(5)), Some(MoveId(91)));
    }
}
