//! Read-only catalog data.
//!
//! The engine never owns catalog data. It reads creatures, moves and lists
//! through [`CatalogOracle`], which the runtime backs with a cache and tests
//! back with a [`CatalogSnapshot`].
mod error;
mod records;
mod snapshot;

pub use error::CatalogError;
pub use records::{Creature, CreatureDetail, ElementType, MagicItem, Move, Personality};
pub use snapshot::CatalogSnapshot;

use crate::ids::{MagicItemId, MonsterId, MoveId};

/// Synchronous catalog lookups.
pub trait CatalogOracle: Send + Sync {
    fn creature(&self, id: MonsterId) -> Option<Creature>;

    /// Move pool and legacy table for a creature, if loaded.
    fn creature_detail(&self, id: MonsterId) -> Option<CreatureDetail>;

    fn move_info(&self, id: MoveId) -> Option<Move>;

    fn magic_item(&self, id: MagicItemId) -> Option<MagicItem>;

    fn creatures(&self) -> Vec<Creature>;

    fn personalities(&self) -> Vec<Personality>;

    fn types(&self) -> Vec<ElementType>;

    fn magic_items(&self) -> Vec<MagicItem>;
}
