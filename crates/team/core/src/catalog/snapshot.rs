use std::collections::BTreeMap;

use crate::ids::{MagicItemId, MonsterId, MoveId};

use super::{
    CatalogOracle, Creature, CreatureDetail, ElementType, MagicItem, Move, Personality,
};

/// In-memory catalog captured at one point in time.
#[derive(Clone, Debug, Default)]
pub struct CatalogSnapshot {
    creatures: BTreeMap<MonsterId, Creature>,
    details: BTreeMap<MonsterId, CreatureDetail>,
    moves: BTreeMap<MoveId, Move>,
    personalities: Vec<Personality>,
    types: Vec<ElementType>,
    magic_items: Vec<MagicItem>,
}

impl CatalogSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_creature(mut self, creature: Creature) -> Self {
        self.insert_creature(creature);
        self
    }

    pub fn with_detail(mut self, detail: CreatureDetail) -> Self {
        self.insert_detail(detail);
        self
    }

    pub fn with_personalities(mut self, personalities: Vec<Personality>) -> Self {
        self.personalities = personalities;
        self
    }

    pub fn with_types(mut self, types: Vec<ElementType>) -> Self {
        self.types = types;
        self
    }

    pub fn with_magic_items(mut self, magic_items: Vec<MagicItem>) -> Self {
        self.magic_items = magic_items;
        self
    }

    pub fn insert_creature(&mut self, creature: Creature) {
        self.creatures.insert(creature.id, creature);
    }

    pub fn insert_move(&mut self, info: Move) {
        self.moves.insert(info.id, info);
    }

    /// Stores a detail record and indexes every move in its pool.
    pub fn insert_detail(&mut self, detail: CreatureDetail) {
        for info in &detail.move_pool {
            self.moves.entry(info.id).or_insert_with(|| info.clone());
        }
        self.details.insert(detail.id, detail);
    }

    pub fn detail_count(&self) -> usize {
        self.details.len()
    }
}

impl CatalogOracle for CatalogSnapshot {
    fn creature(&self, id: MonsterId) -> Option<Creature> {
        self.creatures.get(&id).cloned()
    }

    fn creature_detail(&self, id: MonsterId) -> Option<CreatureDetail> {
        self.details.get(&id).cloned()
    }

    fn move_info(&self, id: MoveId) -> Option<Move> {
        self.moves.get(&id).cloned()
    }

    fn magic_item(&self, id: MagicItemId) -> Option<MagicItem> {
        self.magic_items.iter().find(|item| item.id == id).cloned()
    }

    fn creatures(&self) -> Vec<Creature> {
        self.creatures.values().cloned().collect()
    }

    fn personalities(&self) -> Vec<Personality> {
        self.personalities.clone()
    }

    fn types(&self) -> Vec<ElementType> {
        self.types.clone()
    }

    fn magic_items(&self) -> Vec<MagicItem> {
        self.magic_items.clone()
    }
}
