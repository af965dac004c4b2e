//! Deterministic team-building rules shared by the runtime and offline tools.
//!
//! `team-core` defines the canonical data model (slots, talents, teams) and the
//! constraint engine that decides which fields are missing, which move choices
//! are legal, and how a legacy type change cascades through the four move
//! positions. Every engine function is pure: inputs are a slot plus a catalog
//! snapshot, outputs are violations, candidates, or patches. All slot mutation
//! flows through [`team::TeamStore::set_slot`].
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod ids;
pub mod legacy;
pub mod slot;
pub mod talent;
pub mod team;

pub use catalog::{
    CatalogError, CatalogOracle, CatalogSnapshot, Creature, CreatureDetail, ElementType,
    MagicItem, Move, Personality,
};
pub use config::{BuilderConfig, TeamRules};
pub use engine::{
    Candidate, PickRejection, Violation, Violations, can_pick, change_monster_patch, check_offered,
    check_pick, compute_candidates, on_legacy_move_picked, on_legacy_type_changed,
    pickable_candidates, slot_status, validate_slot,
};
pub use error::{BuilderError, ErrorSeverity};
pub use ids::{ElementId, MagicItemId, MonsterId, MoveId, PersonalityId, TeamId};
pub use legacy::{LegacyIndex, LegacySource, extract_legacy_info};
pub use slot::{MovePosition, Slot, SlotFields, SlotPatch, SlotStatus};
pub use talent::{BoostValue, StatKey, TalentError, Talents, set_talent};
pub use team::{LoadMode, SavedTeam, TeamCreate, TeamError, TeamReport, TeamStore};
