use arrayvec::ArrayVec;

use crate::config::TeamRules;
use crate::slot::{Slot, SlotStatus};

/// A reason a slot is not yet complete.
///
/// Violations are values, not errors: every condition that currently holds
/// is reported, in declaration order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Violation {
    MissingMonster,
    MissingPersonality,
    MissingLegacyType,
    IncompleteMoves,
    NoTalentBoost,
    TooManyTalentBoosts,
}

impl Violation {
    /// Short user-facing hint.
    pub const fn message(self) -> &'static str {
        match self {
            Violation::MissingMonster => "pick a monster",
            Violation::MissingPersonality => "set a personality",
            Violation::MissingLegacyType => "choose a legacy type",
            Violation::IncompleteMoves => "select 4 moves",
            Violation::NoTalentBoost => "boost at least one talent",
            Violation::TooManyTalentBoosts => "boost at most 3 talents",
        }
    }
}

/// Violations of one slot. Never more than one of each kind.
pub type Violations = ArrayVec<Violation, 6>;

/// Lists every violation of `slot`.
pub fn validate_slot(slot: &Slot) -> Violations {
    let mut violations = Violations::new();

    if !slot.monster_id.is_set() {
        violations.push(Violation::MissingMonster);
    }
    if !slot.personality_id.is_set() {
        violations.push(Violation::MissingPersonality);
    }
    if !slot.legacy_type_id.is_set() {
        violations.push(Violation::MissingLegacyType);
    }
    if slot.moves.iter().any(|id| !id.is_set()) {
        violations.push(Violation::IncompleteMoves);
    }

    let boosted = slot.talent.boosted_count();
    if boosted < TeamRules::MIN_BOOSTED_STATS {
        violations.push(Violation::NoTalentBoost);
    }
    if boosted > TeamRules::MAX_BOOSTED_STATS {
        violations.push(Violation::TooManyTalentBoosts);
    }

    violations
}

/// Derives the slot's lifecycle status.
pub fn slot_status(slot: &Slot) -> SlotStatus {
    if slot.is_empty() {
        SlotStatus::Empty
    } else if validate_slot(slot).is_empty() {
        SlotStatus::Complete
    } else {
        SlotStatus::InProgress
    }
}
