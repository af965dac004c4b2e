use crate::config::{BuilderConfig, TeamRules};
use crate::engine::{Violations, slot_status, validate_slot};
use crate::ids::MagicItemId;
use crate::slot::{Slot, SlotPatch, SlotStatus};

use super::{SavedTeam, TeamCreate, TeamError};

/// How [`TeamStore::load_saved`] treats the saved team's name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LoadMode {
    /// Keep the saved name.
    Edit,
    /// Append the configured copy suffix to the saved name.
    Copy,
}

/// Per-slot findings for a whole team.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TeamReport {
    /// Violations of each slot, in slot order.
    pub slots: [Violations; TeamRules::TEAM_SIZE],
    pub missing_magic_item: bool,
}

impl TeamReport {
    /// Indices of slots with at least one violation.
    pub fn incomplete_slots(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, violations)| !violations.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    /// True when the team may be submitted.
    pub fn is_submittable(&self) -> bool {
        !self.missing_magic_item && self.slots.iter().all(|violations| violations.is_empty())
    }
}

/// The single source of truth for the team being edited.
///
/// `A` is the type of the cached analysis result; the store treats it as
/// opaque and only clears it when a slot changes.
#[derive(Clone, Debug)]
pub struct TeamStore<A = ()> {
    config: BuilderConfig,
    name: String,
    magic_item_id: Option<MagicItemId>,
    slots: [Slot; TeamRules::TEAM_SIZE],
    analysis: Option<A>,
}

impl<A> TeamStore<A> {
    /// A fresh team: six empty slots, no magic item, the default name.
    pub fn new(config: BuilderConfig) -> Self {
        Self {
            name: config.default_team_name.clone(),
            config,
            magic_item_id: None,
            slots: Default::default(),
            analysis: None,
        }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn magic_item_id(&self) -> Option<MagicItemId> {
        self.magic_item_id
    }

    pub fn slots(&self) -> &[Slot; TeamRules::TEAM_SIZE] {
        &self.slots
    }

    /// # Errors
    ///
    /// Returns `TeamError::SlotOutOfRange` if `index` is not below six.
    pub fn slot(&self, index: usize) -> Result<&Slot, TeamError> {
        self.slots
            .get(index)
            .ok_or(TeamError::SlotOutOfRange { index })
    }

    /// Applies `patch` to the slot at `index` and drops any cached analysis.
    ///
    /// # Errors
    ///
    /// Returns `TeamError::SlotOutOfRange` without touching the store if
    /// `index` is not below six.
    pub fn set_slot(&mut self, index: usize, patch: &SlotPatch) -> Result<&Slot, TeamError> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(TeamError::SlotOutOfRange { index })?;
        *slot = patch.apply(slot);
        self.analysis = None;
        Ok(&self.slots[index])
    }

    /// Sets or clears the magic item. An unset id clears it.
    pub fn set_magic_item(&mut self, id: Option<MagicItemId>) {
        self.magic_item_id = id.filter(|id| id.is_set());
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_analysis(&mut self, analysis: Option<A>) {
        self.analysis = analysis;
    }

    pub fn analysis(&self) -> Option<&A> {
        self.analysis.as_ref()
    }

    /// Serializes the team as it is, without checking slot completeness.
    ///
    /// # Errors
    ///
    /// Returns `TeamError::MissingMagicItem` if no magic item is set.
    pub fn build_submission_payload(&self) -> Result<TeamCreate, TeamError> {
        let magic_item_id = self.magic_item_id.ok_or(TeamError::MissingMagicItem)?;
        Ok(TeamCreate {
            name: self.name.clone(),
            magic_item_id,
            user_monsters: self.slots.to_vec(),
        })
    }

    pub fn validate(&self) -> TeamReport {
        TeamReport {
            slots: std::array::from_fn(|index| validate_slot(&self.slots[index])),
            missing_magic_item: self.magic_item_id.is_none(),
        }
    }

    /// The submit gate: a magic item must be set and every slot complete.
    ///
    /// # Errors
    ///
    /// `TeamError::MissingMagicItem` takes precedence over
    /// `TeamError::IncompleteTeam`.
    pub fn prepare_submission(&self) -> Result<TeamCreate, TeamError> {
        let report = self.validate();
        if report.missing_magic_item {
            return Err(TeamError::MissingMagicItem);
        }
        let incomplete = report.incomplete_slots();
        if !incomplete.is_empty() {
            return Err(TeamError::IncompleteTeam { slots: incomplete });
        }
        self.build_submission_payload()
    }

    /// Back to six empty slots, no magic item, the default name, no analysis.
    pub fn reset(&mut self) {
        self.name = self.config.default_team_name.clone();
        self.magic_item_id = None;
        self.slots = Default::default();
        self.analysis = None;
    }

    /// Replaces the whole team with a saved one.
    ///
    /// # Errors
    ///
    /// Returns `TeamError::SlotCount` and leaves the store untouched unless
    /// the saved team has exactly six slots.
    pub fn load_saved(&mut self, saved: &SavedTeam, mode: LoadMode) -> Result<(), TeamError> {
        let slots: [Slot; TeamRules::TEAM_SIZE] =
            saved
                .user_monsters
                .clone()
                .try_into()
                .map_err(|rejected: Vec<Slot>| TeamError::SlotCount {
                    expected: TeamRules::TEAM_SIZE,
                    found: rejected.len(),
                })?;

        let saved_name = saved.name.as_deref().filter(|name| !name.is_empty());
        self.name = match (mode, saved_name) {
            (LoadMode::Edit, Some(name)) => name.to_owned(),
            (LoadMode::Edit, None) => self.config.default_team_name.clone(),
            (LoadMode::Copy, name) => format!(
                "{}{}",
                name.unwrap_or(self.config.copy_fallback_name.as_str()),
                self.config.copy_suffix
            ),
        };
        self.magic_item_id = saved.magic_item_id.filter(|id| id.is_set());
        self.slots = slots;
        self.analysis = None;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `TeamError::SlotOutOfRange` if `index` is not below six.
    pub fn slot_status(&self, index: usize) -> Result<SlotStatus, TeamError> {
        self.slot(index).map(slot_status)
    }
}

impl<A> Default for TeamStore<A> {
    fn default() -> Self {
        Self::new(BuilderConfig::default())
    }
}
