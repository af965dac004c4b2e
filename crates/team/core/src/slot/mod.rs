//! Team slot state.
//!
//! A [`Slot`] is one of the six team positions. It is a plain value: the
//! engine never stores derived status on it, and it is only ever replaced as a
//! whole by applying a [`SlotPatch`].
mod fields;
mod patch;

pub use fields::SlotFields;
pub use patch::SlotPatch;

use std::fmt;

use crate::config::TeamRules;
use crate::ids::{ElementId, MonsterId, MoveId, PersonalityId};
use crate::talent::Talents;

/// One creature build.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "wire::SlotWire", into = "wire::SlotWire"))]
pub struct Slot {
    pub monster_id: MonsterId,
    pub personality_id: PersonalityId,
    pub legacy_type_id: ElementId,
    /// Moves in positions 1..=4, [`MoveId::UNSET`] when empty.
    pub moves: [MoveId; TeamRules::MOVES_PER_SLOT],
    pub talent: Talents,
}

impl Slot {
    /// A slot with every id unset and every boost at zero.
    pub const fn empty() -> Self {
        Self {
            monster_id: MonsterId::UNSET,
            personality_id: PersonalityId::UNSET,
            legacy_type_id: ElementId::UNSET,
            moves: [MoveId::UNSET; TeamRules::MOVES_PER_SLOT],
            talent: Talents::empty(),
        }
    }

    /// Returns the move held at `position`.
    #[inline]
    pub fn move_at(&self, position: MovePosition) -> MoveId {
        self.moves[position.index()]
    }

    /// Iterates over the non-empty move ids together with their positions.
    pub fn selected_moves(&self) -> impl Iterator<Item = (MovePosition, MoveId)> + '_ {
        MovePosition::ALL
            .into_iter()
            .map(|position| (position, self.move_at(position)))
            .filter(|(_, id)| id.is_set())
    }

    /// Returns true if `id` is held at any position other than `except`.
    pub fn holds_elsewhere(&self, id: MoveId, except: MovePosition) -> bool {
        self.selected_moves()
            .any(|(position, held)| position != except && held == id)
    }

    /// Returns true when no creature has been chosen.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.monster_id.is_set()
    }
}

/// One of the four move positions of a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MovePosition {
    First,
    Second,
    Third,
    Fourth,
}

impl MovePosition {
    pub const ALL: [Self; TeamRules::MOVES_PER_SLOT] =
        [Self::First, Self::Second, Self::Third, Self::Fourth];

    /// Zero-based array index.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Third => 2,
            Self::Fourth => 3,
        }
    }

    /// One-based position number as used on the wire (`move{n}_id`).
    #[inline]
    pub const fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Parses a one-based position number.
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::First),
            2 => Some(Self::Second),
            3 => Some(Self::Third),
            4 => Some(Self::Fourth),
            _ => None,
        }
    }

    /// The [`SlotFields`] bit for this position.
    pub const fn field(self) -> SlotFields {
        match self {
            Self::First => SlotFields::MOVE1,
            Self::Second => SlotFields::MOVE2,
            Self::Third => SlotFields::MOVE3,
            Self::Fourth => SlotFields::MOVE4,
        }
    }
}

impl fmt::Display for MovePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "move{}", self.number())
    }
}

/// Derived completeness of a slot.
///
/// Never stored; always recomputed from the slot's fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SlotStatus {
    /// No creature chosen.
    Empty,
    /// Creature chosen, violations present.
    InProgress,
    /// No violations.
    Complete,
}

#[cfg(feature = "serde")]
mod wire {
    use super::*;

    /// Flat wire shape shared with the analysis and persistence services.
    #[derive(Default, serde::Serialize, serde::Deserialize)]
    #[serde(default)]
    pub(super) struct SlotWire {
        monster_id: MonsterId,
        personality_id: PersonalityId,
        legacy_type_id: ElementId,
        move1_id: MoveId,
        move2_id: MoveId,
        move3_id: MoveId,
        move4_id: MoveId,
        talent: Talents,
    }

    impl From<SlotWire> for Slot {
        fn from(wire: SlotWire) -> Self {
            Self {
                monster_id: wire.monster_id,
                personality_id: wire.personality_id,
                legacy_type_id: wire.legacy_type_id,
                moves: [wire.move1_id, wire.move2_id, wire.move3_id, wire.move4_id],
                talent: wire.talent,
            }
        }
    }

    impl From<Slot> for SlotWire {
        fn from(slot: Slot) -> Self {
            let [move1_id, move2_id, move3_id, move4_id] = slot.moves;
            Self {
                monster_id: slot.monster_id,
                personality_id: slot.personality_id,
                legacy_type_id: slot.legacy_type_id,
                move1_id,
                move2_id,
                move3_id,
                move4_id,
                talent: slot.talent,
            }
        }
    }
}
