use crate::config::TeamRules;
use crate::ids::{ElementId, MonsterId, MoveId, PersonalityId};
use crate::talent::Talents;

use super::{MovePosition, Slot, SlotFields};

/// Partial slot update with explicit presence tracking.
///
/// `None` means "leave the field as it is"; `Some(UNSET)` means "clear it".
/// Applying a patch replaces the slot with the merge of its previous value and
/// every present field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlotPatch {
    pub monster_id: Option<MonsterId>,
    pub personality_id: Option<PersonalityId>,
    pub legacy_type_id: Option<ElementId>,
    pub moves: [Option<MoveId>; TeamRules::MOVES_PER_SLOT],
    pub talent: Option<Talents>,
}

impl SlotPatch {
    /// An empty patch that touches nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn monster(mut self, id: MonsterId) -> Self {
        self.monster_id = Some(id);
        self
    }

    pub fn personality(mut self, id: PersonalityId) -> Self {
        self.personality_id = Some(id);
        self
    }

    pub fn legacy_type(mut self, id: ElementId) -> Self {
        self.legacy_type_id = Some(id);
        self
    }

    pub fn move_at(mut self, position: MovePosition, id: MoveId) -> Self {
        self.moves[position.index()] = Some(id);
        self
    }

    pub fn talent(mut self, talent: Talents) -> Self {
        self.talent = Some(talent);
        self
    }

    /// Returns the merged slot. `base` is not modified.
    pub fn apply(&self, base: &Slot) -> Slot {
        let mut next = base.clone();
        if let Some(id) = self.monster_id {
            next.monster_id = id;
        }
        if let Some(id) = self.personality_id {
            next.personality_id = id;
        }
        if let Some(id) = self.legacy_type_id {
            next.legacy_type_id = id;
        }
        for (held, patched) in next.moves.iter_mut().zip(self.moves) {
            if let Some(id) = patched {
                *held = id;
            }
        }
        if let Some(talent) = self.talent {
            next.talent = talent;
        }
        next
    }

    /// Fields present in this patch.
    pub fn touched(&self) -> SlotFields {
        let mut fields = SlotFields::empty();
        fields.set(SlotFields::MONSTER, self.monster_id.is_some());
        fields.set(SlotFields::PERSONALITY, self.personality_id.is_some());
        fields.set(SlotFields::LEGACY_TYPE, self.legacy_type_id.is_some());
        for position in MovePosition::ALL {
            fields.set(position.field(), self.moves[position.index()].is_some());
        }
        fields.set(SlotFields::TALENT, self.talent.is_some());
        fields
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.touched().is_empty()
    }

    /// Combines two patches; fields present in `later` win.
    pub fn merge(mut self, later: &SlotPatch) -> Self {
        self.monster_id = later.monster_id.or(self.monster_id);
        self.personality_id = later.personality_id.or(self.personality_id);
        self.legacy_type_id = later.legacy_type_id.or(self.legacy_type_id);
        for (mine, theirs) in self.moves.iter_mut().zip(later.moves) {
            *mine = theirs.or(*mine);
        }
        self.talent = later.talent.or(self.talent);
        self
    }

    /// Minimal patch turning `before` into `after`, or `None` if they are equal.
    pub fn from_states(before: &Slot, after: &Slot) -> Option<Self> {
        let mut patch = Self::new();
        if before.monster_id != after.monster_id {
            patch.monster_id = Some(after.monster_id);
        }
        if before.personality_id != after.personality_id {
            patch.personality_id = Some(after.personality_id);
        }
        if before.legacy_type_id != after.legacy_type_id {
            patch.legacy_type_id = Some(after.legacy_type_id);
        }
        for position in MovePosition::ALL {
            if before.move_at(position) != after.move_at(position) {
                patch.moves[position.index()] = Some(after.move_at(position));
            }
        }
        if before.talent != after.talent {
            patch.talent = Some(after.talent);
        }

        if patch.is_empty() {
            return None;
        }
        Some(patch)
    }
}
