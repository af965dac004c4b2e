//! Constraint engine.
//!
//! Pure functions over a [`Slot`](crate::Slot) and the creature's
//! [`LegacyIndex`](crate::LegacyIndex). Nothing here is cached or mutated;
//! callers apply the returned patches to the store.
//!
//! * [`validate_slot`] lists what keeps a slot from being complete.
//! * [`compute_candidates`] and [`check_pick`] drive move selection.
//! * [`on_legacy_move_picked`] and [`on_legacy_type_changed`] produce the
//!   cascading patches that keep legacy type and legacy move consistent.
mod candidates;
mod cascade;
mod validation;

pub use candidates::{
    Candidate, PickRejection, can_pick, check_offered, check_pick, compute_candidates,
    pickable_candidates,
};
pub use cascade::{change_monster_patch, on_legacy_move_picked, on_legacy_type_changed};
pub use validation::{Violation, Violations, slot_status, validate_slot};
