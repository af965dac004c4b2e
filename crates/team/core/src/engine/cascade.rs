use crate::ids::{ElementId, MonsterId, MoveId};
use crate::legacy::LegacyIndex;
use crate::slot::{MovePosition, Slot, SlotPatch};

/// Patch for picking `move_id` at `position`.
///
/// Picking a legacy move while no legacy type is chosen also chooses the type
/// that unlocks it, in the same patch. Picking [`MoveId::UNSET`] clears the
/// position.
pub fn on_legacy_move_picked(
    slot: &Slot,
    position: MovePosition,
    move_id: MoveId,
    legacy: &LegacyIndex,
) -> SlotPatch {
    let patch = SlotPatch::new().move_at(position, move_id);
    if !move_id.is_set() || slot.legacy_type_id.is_set() {
        return patch;
    }

    match legacy.type_for_move(move_id) {
        Some(type_id) => patch.legacy_type(type_id),
        None => patch,
    }
}

/// Patch for switching the legacy type to `type_id`.
///
/// Every position holding a legacy move other than the one `type_id` unlocks
/// is cleared. Ordinary moves are never touched.
pub fn on_legacy_type_changed(slot: &Slot, type_id: ElementId, legacy: &LegacyIndex) -> SlotPatch {
    let allowed = legacy.move_for_type(type_id);

    slot.selected_moves()
        .filter(|(_, held)| legacy.contains(*held) && Some(*held) != allowed)
        .fold(SlotPatch::new().legacy_type(type_id), |patch, (position, _)| {
            patch.move_at(position, MoveId::UNSET)
        })
}

/// Patch for the "change creature" action: clears the creature and all four
/// moves. Personality, legacy type and talents stay.
pub fn change_monster_patch() -> SlotPatch {
    MovePosition::ALL
        .into_iter()
        .fold(SlotPatch::new().monster(MonsterId::UNSET), |patch, position| {
            patch.move_at(position, MoveId::UNSET)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::PersonalityId;
    use crate::slot::SlotFields;

    fn index() -> LegacyIndex {
        LegacyIndex::from_pairs([
            (ElementId(3), MoveId(77)),
            (ElementId(4), MoveId(88)),
            (ElementId(9), MoveId(90)),
        ])
    }

    fn slot(legacy_type: u32, moves: [u32; 4]) -> Slot {
        Slot {
            monster_id: MonsterId(5),
            personality_id: PersonalityId(2),
            legacy_type_id: ElementId(legacy_type),
            moves: moves.map(MoveId),
            ..Slot::empty()
        }
    }

    #[test]
    fn picking_a_legacy_move_without_type_sets_both() {
        let before = slot(0, [10, 0, 0, 0]);

        let patch = on_legacy_move_picked(&before, MovePosition::Second, MoveId(90), &index());
        let after = patch.apply(&before);

        assert_eq!(patch.touched(), SlotFields::LEGACY_TYPE | SlotFields::MOVE2);
        assert_eq!(after.legacy_type_id, ElementId(9));
        assert_eq!(after.move_at(MovePosition::Second), MoveId(90));
    }

    #[test]
    fn picking_with_a_type_already_chosen_sets_only_the_move() {
        let before = slot(3, [0; 4]);

        let patch = on_legacy_move_picked(&before, MovePosition::First, MoveId(77), &index());

        assert_eq!(patch.touched(), SlotFields::MOVE1);
    }

    #[test]
    fn picking_an_ordinary_move_or_clearing_sets_only_the_move() {
        let before = slot(0, [10, 11, 0, 0]);

        let ordinary = on_legacy_move_picked(&before, MovePosition::Third, MoveId(12), &index());
        let cleared = on_legacy_move_picked(&before, MovePosition::First, MoveId::UNSET, &index());

        assert_eq!(ordinary.touched(), SlotFields::MOVE3);
        assert_eq!(cleared.apply(&before).move_at(MovePosition::First), MoveId::UNSET);
        assert_eq!(cleared.legacy_type_id, None);
    }

    #[test]
    fn changing_type_clears_the_stale_legacy_move_only() {
        let before = slot(3, [10, 77, 11, 12]);

        let after = on_legacy_type_changed(&before, ElementId(4), &index()).apply(&before);

        assert_eq!(after.legacy_type_id, ElementId(4));
        assert_eq!(after.moves, [MoveId(10), MoveId::UNSET, MoveId(11), MoveId(12)]);
    }

    #[test]
    fn changing_to_the_matching_type_keeps_the_move() {
        let before = slot(0, [10, 88, 0, 0]);

        let patch = on_legacy_type_changed(&before, ElementId(4), &index());

        assert_eq!(patch.touched(), SlotFields::LEGACY_TYPE);
    }

    #[test]
    fn after_a_type_change_at_most_the_allowed_legacy_move_remains() {
        let starts = [
            slot(3, [77, 10, 0, 0]),
            slot(0, [88, 90, 77, 10]),
            slot(9, [90, 0, 0, 11]),
        ];

        for before in starts {
            for type_id in [3, 4, 9, 12] {
                let type_id = ElementId(type_id);
                let after = on_legacy_type_changed(&before, type_id, &index()).apply(&before);

                let held: Vec<MoveId> = after
                    .selected_moves()
                    .map(|(_, id)| id)
                    .filter(|id| index().contains(*id))
                    .collect();
                assert!(held.len() <= 1);
                if let Some(id) = held.first() {
                    assert_eq!(Some(*id), index().move_for_type(type_id));
                }
            }
        }
    }

    #[test]
    fn change_monster_clears_creature_and_moves() {
        let mut before = slot(3, [10, 77, 11, 12]);
        before.talent.spd_boost = crate::talent::BoostValue::new(9).unwrap();

        let after = change_monster_patch().apply(&before);

        assert_eq!(after.monster_id, MonsterId::UNSET);
        assert_eq!(after.moves, [MoveId::UNSET; 4]);
        assert_eq!(after.personality_id, PersonalityId(2));
        assert_eq!(after.legacy_type_id, ElementId(3));
        assert_eq!(after.talent, before.talent);
    }
}
