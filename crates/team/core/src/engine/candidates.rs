use crate::catalog::CreatureDetail;
use crate::error::{BuilderError, ErrorSeverity};
use crate::ids::{ElementId, MoveId};
use crate::legacy::LegacyIndex;
use crate::slot::{MovePosition, Slot};

/// A move offered for a slot's move positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    pub move_id: MoveId,
    pub is_legacy: bool,
}

impl Candidate {
    pub const fn ordinary(move_id: MoveId) -> Self {
        Self {
            move_id,
            is_legacy: false,
        }
    }

    pub const fn legacy(move_id: MoveId) -> Self {
        Self {
            move_id,
            is_legacy: true,
        }
    }
}

/// Moves selectable for `slot`, legacy moves first.
///
/// With a legacy type chosen only that type's legacy move is offered; without
/// one every known legacy move is offered in ascending type order. Pool moves
/// follow in catalog order. A detail that has not arrived yet yields nothing.
pub fn compute_candidates(
    slot: &Slot,
    detail: Option<&CreatureDetail>,
    legacy: &LegacyIndex,
) -> Vec<Candidate> {
    let Some(detail) = detail else {
        return Vec::new();
    };

    let mut candidates = Vec::with_capacity(detail.move_pool.len() + legacy.len());
    if slot.legacy_type_id.is_set() {
        candidates.extend(
            legacy
                .move_for_type(slot.legacy_type_id)
                .map(Candidate::legacy),
        );
    } else {
        candidates.extend(legacy.moves().map(|(_, move_id)| Candidate::legacy(move_id)));
    }
    candidates.extend(
        detail
            .move_pool
            .iter()
            .map(|info| Candidate::ordinary(info.id)),
    );
    candidates
}

/// Why a candidate cannot go into a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PickRejection {
    /// The move is already held at another position.
    #[error("move {move_id} is already selected at {held_at}")]
    Duplicate {
        move_id: MoveId,
        held_at: MovePosition,
    },

    /// Another position already holds a legacy move.
    #[error("only one legacy move per slot ({held} is already at {held_at})")]
    SecondLegacy { held: MoveId, held_at: MovePosition },

    /// The legacy move belongs to a type other than the slot's legacy type.
    #[error("legacy move {move_id} is not unlocked by legacy type {legacy_type}")]
    WrongLegacyType {
        move_id: MoveId,
        legacy_type: ElementId,
    },

    /// The move is not among the slot's candidates.
    #[error("move {move_id} is not offered for this slot")]
    NotOffered { move_id: MoveId },
}

impl BuilderError for PickRejection {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Rejected
    }

    fn error_code(&self) -> &'static str {
        match self {
            PickRejection::Duplicate { .. } => "PICK_DUPLICATE",
            PickRejection::SecondLegacy { .. } => "PICK_SECOND_LEGACY",
            PickRejection::WrongLegacyType { .. } => "PICK_WRONG_LEGACY_TYPE",
            PickRejection::NotOffered { .. } => "PICK_NOT_OFFERED",
        }
    }
}

/// Checks whether `move_id` may be placed at `position`.
///
/// The value currently held at `position` never counts against the pick,
/// since picking replaces it. A move the index knows as legacy is checked
/// against the slot's legacy type even when `is_legacy` is false.
///
/// # Errors
///
/// Returns the first rule the pick breaks.
pub fn check_pick(
    slot: &Slot,
    position: MovePosition,
    move_id: MoveId,
    is_legacy: bool,
    legacy: &LegacyIndex,
) -> Result<(), PickRejection> {
    if let Some((held_at, _)) = slot
        .selected_moves()
        .find(|(at, held)| *at != position && *held == move_id)
    {
        return Err(PickRejection::Duplicate { move_id, held_at });
    }

    if legacy.contains(move_id) && slot.legacy_type_id.is_set() {
        let legacy_type = slot.legacy_type_id;
        if legacy.move_for_type(legacy_type) != Some(move_id) {
            return Err(PickRejection::WrongLegacyType {
                move_id,
                legacy_type,
            });
        }
    }

    if !is_legacy {
        return Ok(());
    }

    if let Some((held_at, held)) = slot
        .selected_moves()
        .find(|(at, held)| *at != position && legacy.contains(*held))
    {
        return Err(PickRejection::SecondLegacy { held, held_at });
    }
    Ok(())
}

/// Checks that `move_id` is one of `candidates`.
///
/// # Errors
///
/// Returns `PickRejection::NotOffered` otherwise. An empty candidate list, as
/// before the creature detail arrives, offers nothing.
pub fn check_offered(candidates: &[Candidate], move_id: MoveId) -> Result<Candidate, PickRejection> {
    candidates
        .iter()
        .find(|candidate| candidate.move_id == move_id)
        .copied()
        .ok_or(PickRejection::NotOffered { move_id })
}

/// Boolean form of [`check_pick`].
#[inline]
pub fn can_pick(
    slot: &Slot,
    position: MovePosition,
    move_id: MoveId,
    is_legacy: bool,
    legacy: &LegacyIndex,
) -> bool {
    check_pick(slot, position, move_id, is_legacy, legacy).is_ok()
}

/// Pairs each candidate with whether it can be picked at `position`.
pub fn pickable_candidates(
    slot: &Slot,
    position: MovePosition,
    candidates: &[Candidate],
    legacy: &LegacyIndex,
) -> Vec<(Candidate, bool)> {
    candidates
        .iter()
        .map(|candidate| {
            let pickable = can_pick(
                slot,
                position,
                candidate.move_id,
                candidate.is_legacy,
                legacy,
            );
            (*candidate, pickable)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Move;
    use crate::ids::MonsterId;
    use crate::legacy::LegacySource;

    fn detail() -> CreatureDetail {
        CreatureDetail::new(
            MonsterId(5),
            vec![
                Move::new(MoveId(10), "Tackle"),
                Move::new(MoveId(11), "Ember"),
                Move::new(MoveId(12), "Guard"),
            ],
            LegacySource::by_type([(4, 88), (3, 77)]),
        )
    }

    fn index() -> LegacyIndex {
        LegacyIndex::from_source(&detail().legacy_moves)
    }

    fn slot_with(moves: [u32; 4]) -> Slot {
        Slot {
            monster_id: MonsterId(5),
            moves: moves.map(MoveId),
            ..Slot::empty()
        }
    }

    #[test]
    fn without_a_type_every_legacy_move_leads_in_type_order() {
        let detail = detail();

        let candidates = compute_candidates(&slot_with([0; 4]), Some(&detail), &index());

        assert_eq!(
            candidates,
            vec![
                Candidate::legacy(MoveId(77)),
                Candidate::legacy(MoveId(88)),
                Candidate::ordinary(MoveId(10)),
                Candidate::ordinary(MoveId(11)),
                Candidate::ordinary(MoveId(12)),
            ]
        );
    }

    #[test]
    fn chosen_type_offers_only_its_legacy_move() {
        let detail = detail();
        let mut slot = slot_with([0; 4]);
        slot.legacy_type_id = ElementId(4);

        let candidates = compute_candidates(&slot, Some(&detail), &index());

        assert_eq!(candidates[0], Candidate::legacy(MoveId(88)));
        assert_eq!(candidates.iter().filter(|c| c.is_legacy).count(), 1);
        assert_eq!(candidates.len(), 4);
    }

    #[test]
    fn type_without_legacy_move_offers_pool_only() {
        let detail = detail();
        let mut slot = slot_with([0; 4]);
        slot.legacy_type_id = ElementId(9);

        let candidates = compute_candidates(&slot, Some(&detail), &index());

        assert!(candidates.iter().all(|c| !c.is_legacy));
        assert_eq!(candidates.len(), 3);
    }

    #[test]
    fn missing_detail_yields_no_candidates() {
        assert!(compute_candidates(&slot_with([0; 4]), None, &index()).is_empty());
    }

    #[test]
    fn duplicate_elsewhere_is_rejected_but_own_position_is_exempt() {
        let slot = slot_with([10, 11, 0, 0]);

        assert_eq!(
            check_pick(&slot, MovePosition::Third, MoveId(10), false, &index()),
            Err(PickRejection::Duplicate {
                move_id: MoveId(10),
                held_at: MovePosition::First,
            })
        );
        assert!(can_pick(&slot, MovePosition::First, MoveId(10), false, &index()));
        assert!(can_pick(&slot, MovePosition::Third, MoveId(12), false, &index()));
    }

    #[test]
    fn second_legacy_move_is_rejected() {
        let slot = slot_with([77, 10, 0, 0]);

        assert_eq!(
            check_pick(&slot, MovePosition::Third, MoveId(88), true, &index()),
            Err(PickRejection::SecondLegacy {
                held: MoveId(77),
                held_at: MovePosition::First,
            })
        );
        // Replacing the held legacy move in its own position is fine.
        assert!(can_pick(&slot, MovePosition::First, MoveId(88), true, &index()));
        // Ordinary moves are not affected by the legacy rule.
        assert!(can_pick(&slot, MovePosition::Third, MoveId(12), false, &index()));
    }

    #[test]
    fn pickable_candidates_annotates_each_option() {
        let detail = detail();
        let slot = slot_with([77, 10, 0, 0]);
        let candidates = compute_candidates(&slot, Some(&detail), &index());

        let annotated = pickable_candidates(&slot, MovePosition::Third, &candidates, &index());

        let blocked: Vec<MoveId> = annotated
            .iter()
            .filter(|(_, pickable)| !pickable)
            .map(|(candidate, _)| candidate.move_id)
            .collect();
        assert_eq!(blocked, vec![MoveId(77), MoveId(88), MoveId(10)]);
    }

    #[test]
    fn legacy_move_of_another_type_is_rejected() {
        let mut slot = slot_with([0, 10, 0, 0]);
        slot.legacy_type_id = ElementId(3);

        assert_eq!(
            check_pick(&slot, MovePosition::First, MoveId(88), true, &index()),
            Err(PickRejection::WrongLegacyType {
                move_id: MoveId(88),
                legacy_type: ElementId(3),
            })
        );
        // The caller's tag does not bypass the rule.
        assert!(!can_pick(&slot, MovePosition::First, MoveId(88), false, &index()));
        assert!(can_pick(&slot, MovePosition::First, MoveId(77), true, &index()));
    }

    #[test]
    fn only_candidates_are_offered() {
        let detail = detail();
        let mut slot = slot_with([0; 4]);
        slot.legacy_type_id = ElementId(3);
        let candidates = compute_candidates(&slot, Some(&detail), &index());

        assert_eq!(
            check_offered(&candidates, MoveId(77)),
            Ok(Candidate::legacy(MoveId(77)))
        );
        assert_eq!(
            check_offered(&candidates, MoveId(9999)),
            Err(PickRejection::NotOffered {
                move_id: MoveId(9999)
            })
        );
        assert!(check_offered(&[], MoveId(10)).is_err());
    }
}
