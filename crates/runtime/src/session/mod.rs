//! Builder session: one team being edited against a shared catalog.
//!
//! The session owns the [`TeamStore`] and is the only writer to it. Every slot
//! edit is turned into a patch by the constraint engine and applied through
//! [`TeamStore::set_slot`]. Creature details arrive asynchronously: selecting a
//! creature returns a [`DetailRequest`], and the fetched detail is attached
//! only if the slot still holds the creature it was requested for.

use std::sync::Arc;

use team_core::{
    BoostValue, BuilderConfig, Candidate, ElementId, LegacyIndex, LoadMode, MagicItemId,
    MonsterId, MovePosition, MoveId, PersonalityId, SavedTeam, Slot, SlotPatch, StatKey,
    TeamRules, TeamId, TeamReport, TeamStore, change_monster_patch, check_offered, check_pick,
    compute_candidates, on_legacy_move_picked, on_legacy_type_changed, pickable_candidates,
    set_talent,
};

use crate::analysis::{AnalysisReport, AnalysisService};
use crate::catalog::{CatalogCache, DetailRequest, FetchedDetail, ResolvedDetail};
use crate::error::{Result, RuntimeError};
use crate::repository::TeamRepository;

static NO_LEGACY: LegacyIndex = LegacyIndex::new();

pub struct BuilderSession {
    store: TeamStore<AnalysisReport>,
    catalog: Arc<CatalogCache>,
    attached: [Option<Arc<ResolvedDetail>>; TeamRules::TEAM_SIZE],
    analysis: Arc<dyn AnalysisService>,
    repository: Arc<dyn TeamRepository>,
    team_id: Option<TeamId>,
}

impl BuilderSession {
    pub fn new(
        config: BuilderConfig,
        catalog: Arc<CatalogCache>,
        analysis: Arc<dyn AnalysisService>,
        repository: Arc<dyn TeamRepository>,
    ) -> Self {
        Self {
            store: TeamStore::new(config),
            catalog,
            attached: Default::default(),
            analysis,
            repository,
            team_id: None,
        }
    }

    pub fn store(&self) -> &TeamStore<AnalysisReport> {
        &self.store
    }

    pub fn catalog(&self) -> &Arc<CatalogCache> {
        &self.catalog
    }

    /// Id of the saved team being edited, if any.
    pub fn team_id(&self) -> Option<TeamId> {
        self.team_id
    }

    pub fn slot(&self, index: usize) -> Result<&Slot> {
        Ok(self.store.slot(index)?)
    }

    /// The detail attached to a slot, if it has arrived.
    pub fn detail(&self, index: usize) -> Option<&Arc<ResolvedDetail>> {
        self.attached.get(index).and_then(Option::as_ref)
    }

    fn legacy(&self, index: usize) -> &LegacyIndex {
        self.detail(index).map_or(&NO_LEGACY, |resolved| &resolved.legacy)
    }

    fn apply(&mut self, index: usize, patch: &SlotPatch) -> Result<&Slot> {
        tracing::debug!("Applying patch to slot {}: {:?}", index, patch);
        Ok(self.store.set_slot(index, patch)?)
    }

    fn detach(&mut self, index: usize) {
        if let Some(attached) = self.attached.get_mut(index) {
            *attached = None;
        }
    }

    // ------------------------------------------------------------------
    // Slot edits
    // ------------------------------------------------------------------

    /// Puts a creature in a slot and returns the detail fetch to issue.
    ///
    /// Switching to a different creature clears the four moves, as they belong
    /// to the previous creature's pool. Returns `None` when the slot already
    /// holds `id` with its detail attached.
    pub fn select_monster(&mut self, index: usize, id: MonsterId) -> Result<Option<DetailRequest>> {
        let current = self.store.slot(index)?.monster_id;
        if current == id && self.detail(index).is_some() {
            return Ok(None);
        }

        let patch = if current.is_set() && current != id {
            change_monster_patch().merge(&SlotPatch::new().monster(id))
        } else {
            SlotPatch::new().monster(id)
        };
        self.apply(index, &patch)?;
        self.detach(index);

        if !id.is_set() {
            return Ok(None);
        }
        Ok(Some(DetailRequest {
            slot: index,
            monster_id: id,
        }))
    }

    /// The "change creature" action: clears the creature and its moves.
    pub fn clear_monster(&mut self, index: usize) -> Result<&Slot> {
        self.store.slot(index)?;
        self.detach(index);
        self.apply(index, &change_monster_patch())
    }

    /// Attaches a fetched detail if the slot still holds the creature the fetch
    /// was issued for. Returns whether it was attached.
    pub fn accept_detail(&mut self, fetched: FetchedDetail) -> bool {
        let FetchedDetail { request, resolved } = fetched;
        let Ok(slot) = self.store.slot(request.slot) else {
            return false;
        };

        if slot.monster_id != request.monster_id {
            tracing::debug!(
                "Dropping detail for creature {} on slot {}: slot now holds {}",
                request.monster_id,
                request.slot,
                slot.monster_id
            );
            return false;
        }

        self.attached[request.slot] = Some(resolved);
        true
    }

    /// Fetches the detail for `request` and offers it to [`Self::accept_detail`].
    pub async fn load_detail(&mut self, request: DetailRequest) -> Result<bool> {
        let fetched = self.catalog.fetch(request).await?;
        Ok(self.accept_detail(fetched))
    }

    /// Resolves every request in turn. Returns how many details were attached.
    pub async fn load_details(
        &mut self,
        requests: impl IntoIterator<Item = DetailRequest>,
    ) -> Result<usize> {
        let mut attached = 0;
        for request in requests {
            if self.load_detail(request).await? {
                attached += 1;
            }
        }
        Ok(attached)
    }

    pub fn set_personality(&mut self, index: usize, id: PersonalityId) -> Result<&Slot> {
        self.apply(index, &SlotPatch::new().personality(id))
    }

    /// Switches the legacy type, clearing legacy moves the new type does not
    /// unlock.
    pub fn change_legacy_type(&mut self, index: usize, type_id: ElementId) -> Result<&Slot> {
        let patch = on_legacy_type_changed(self.store.slot(index)?, type_id, self.legacy(index));
        self.apply(index, &patch)
    }

    /// Places `move_id` at `position`, or clears it when `move_id` is unset.
    ///
    /// A legacy pick with no legacy type chosen also sets the type.
    ///
    /// # Errors
    ///
    /// `RuntimeError::MoveRejected` if the move is not among the slot's
    /// candidates (nothing is offered before the detail arrives), is held
    /// elsewhere, or would be a second legacy move. The slot is unchanged.
    pub fn pick_move(
        &mut self,
        index: usize,
        position: MovePosition,
        move_id: MoveId,
    ) -> Result<&Slot> {
        let slot = self.store.slot(index)?;
        let legacy = self.legacy(index);

        if move_id.is_set() {
            let candidates = self.candidates(index)?;
            let candidate = check_offered(&candidates, move_id)?;
            check_pick(slot, position, move_id, candidate.is_legacy, legacy)?;
        }
        let patch = on_legacy_move_picked(slot, position, move_id, legacy);
        self.apply(index, &patch)
    }

    /// # Errors
    ///
    /// `RuntimeError::Talent` if a fourth stat would be boosted. The slot is
    /// unchanged.
    pub fn set_talent(&mut self, index: usize, stat: StatKey, value: BoostValue) -> Result<&Slot> {
        let updated = set_talent(self.store.slot(index)?, stat, value)?;
        self.apply(index, &SlotPatch::new().talent(updated.talent))
    }

    // ------------------------------------------------------------------
    // Team-level fields
    // ------------------------------------------------------------------

    pub fn set_magic_item(&mut self, id: Option<MagicItemId>) {
        self.store.set_magic_item(id);
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.store.set_name(name);
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Candidate moves for a slot; empty until the creature's detail arrives.
    pub fn candidates(&self, index: usize) -> Result<Vec<Candidate>> {
        let slot = self.store.slot(index)?;
        let detail = self.detail(index).map(|resolved| &resolved.detail);
        Ok(compute_candidates(slot, detail, self.legacy(index)))
    }

    /// Candidates for `position`, each paired with whether it can be picked.
    pub fn pickable(&self, index: usize, position: MovePosition) -> Result<Vec<(Candidate, bool)>> {
        let candidates = self.candidates(index)?;
        Ok(pickable_candidates(
            self.store.slot(index)?,
            position,
            &candidates,
            self.legacy(index),
        ))
    }

    pub fn validate(&self) -> TeamReport {
        self.store.validate()
    }

    pub fn analysis(&self) -> Option<&AnalysisReport> {
        self.store.analysis()
    }

    // ------------------------------------------------------------------
    // Collaborators
    // ------------------------------------------------------------------

    /// Submits the team for analysis and keeps the report.
    ///
    /// # Errors
    ///
    /// Submission gate errors from the store, or the service's error verbatim.
    /// No report is stored on failure.
    pub async fn analyze(&mut self) -> Result<AnalysisReport> {
        let payload = self.store.prepare_submission()?;

        let report = self
            .analysis
            .analyze(&payload)
            .await
            .inspect_err(|e| tracing::warn!("Analysis failed for team '{}': {}", payload.name, e))?;

        tracing::info!("Analysis completed for team '{}'", payload.name);
        self.store.set_analysis(Some(report.clone()));
        Ok(report)
    }

    /// Saves the team, updating the record it was loaded from if it still
    /// exists. Incomplete slots may be saved; a magic item is required.
    pub fn save(&mut self) -> Result<SavedTeam> {
        let payload = self.store.build_submission_payload()?;

        let saved = match self.team_id {
            Some(id) if self.repository.exists(id) => self.repository.update(id, &payload)?,
            _ => self.repository.create(&payload)?,
        };

        tracing::info!("Saved team '{}' as {}", payload.name, saved.id);
        self.team_id = Some(saved.id);
        Ok(saved)
    }

    /// Replaces the team with a saved one and returns the detail fetches for
    /// its occupied slots.
    ///
    /// `LoadMode::Edit` keeps editing the saved record; `LoadMode::Copy` starts
    /// a new one.
    pub fn load(&mut self, id: TeamId, mode: LoadMode) -> Result<Vec<DetailRequest>> {
        let saved = self
            .repository
            .load(id)?
            .ok_or(RuntimeError::TeamNotFound(id))?;

        self.open(&saved, mode)?;
        self.team_id = match mode {
            LoadMode::Edit => Some(id),
            LoadMode::Copy => None,
        };

        tracing::info!("Loaded team {} ({})", id, mode);
        Ok(self.pending_details())
    }

    /// Deletes a saved team. If it is the team being edited, the session keeps
    /// its contents but is no longer linked to a saved record, so the next
    /// save creates a new one.
    ///
    /// # Errors
    ///
    /// `RuntimeError::TeamNotFound` if nothing is stored under `id`.
    pub fn delete(&mut self, id: TeamId) -> Result<()> {
        if !self.repository.exists(id) {
            return Err(RuntimeError::TeamNotFound(id));
        }
        self.repository.delete(id)?;

        if self.team_id == Some(id) {
            self.team_id = None;
        }
        tracing::info!("Deleted team {}", id);
        Ok(())
    }

    /// Replaces the team with `saved` without touching the repository link.
    pub fn open(&mut self, saved: &SavedTeam, mode: LoadMode) -> Result<()> {
        self.store.load_saved(saved, mode)?;
        self.attached = Default::default();
        Ok(())
    }

    /// Detail fetches still needed for occupied slots.
    pub fn pending_details(&self) -> Vec<DetailRequest> {
        self.store
            .slots()
            .iter()
            .enumerate()
            .filter(|(index, slot)| !slot.is_empty() && self.detail(*index).is_none())
            .map(|(index, slot)| DetailRequest {
                slot: index,
                monster_id: slot.monster_id,
            })
            .collect()
    }

    /// Starts over with an empty, unsaved team.
    pub fn reset(&mut self) {
        self.store.reset();
        self.attached = Default::default();
        self.team_id = None;
    }
}

#[cfg(test)]
mod tests {
    use team_core::{
        BuilderError, CatalogSnapshot, CreatureDetail, LegacySource, Move, PickRejection,
        SlotStatus,
    };

    use super::*;
    use crate::analysis::LocalAnalysis;
    use crate::catalog::OracleSource;
    use crate::repository::InMemoryTeamRepo;

    fn session() -> BuilderSession {
        let snapshot = CatalogSnapshot::new().with_detail(CreatureDetail::new(
            MonsterId(5),
            (10..14).map(|id| Move::new(MoveId(id), "pool")).collect(),
            LegacySource::by_type([(3, 77), (4, 88)]),
        ));
        let source = OracleSource::new(Arc::new(snapshot));
        BuilderSession::new(
            BuilderConfig::default(),
            Arc::new(CatalogCache::new(Arc::new(source))),
            Arc::new(LocalAnalysis),
            Arc::new(InMemoryTeamRepo::new()),
        )
    }

    #[tokio::test]
    async fn candidates_appear_once_the_detail_arrives() {
        let mut session = session();
        let request = session.select_monster(0, MonsterId(5)).unwrap().unwrap();

        assert!(session.candidates(0).unwrap().is_empty());

        assert!(session.load_detail(request).await.unwrap());
        let candidates = session.candidates(0).unwrap();
        assert_eq!(candidates.len(), 6);
        assert_eq!(candidates[0], Candidate::legacy(MoveId(77)));
    }

    #[tokio::test]
    async fn legacy_pick_sets_the_type() {
        let mut session = session();
        let request = session.select_monster(0, MonsterId(5)).unwrap().unwrap();
        session.load_detail(request).await.unwrap();

        let slot = session.pick_move(0, MovePosition::Second, MoveId(88)).unwrap();

        assert_eq!(slot.legacy_type_id, ElementId(4));
        assert_eq!(slot.move_at(MovePosition::Second), MoveId(88));
    }

    #[tokio::test]
    async fn rejected_pick_leaves_the_slot_alone() {
        let mut session = session();
        let request = session.select_monster(0, MonsterId(5)).unwrap().unwrap();
        session.load_detail(request).await.unwrap();
        session.pick_move(0, MovePosition::First, MoveId(77)).unwrap();
        let before = session.slot(0).unwrap().clone();

        let err = session
            .pick_move(0, MovePosition::Second, MoveId(88))
            .unwrap_err();

        assert!(matches!(err, RuntimeError::MoveRejected(_)));
        assert_eq!(session.slot(0).unwrap(), &before);
    }

    #[tokio::test]
    async fn legacy_move_of_another_type_is_not_offered() {
        let mut session = session();
        let request = session.select_monster(0, MonsterId(5)).unwrap().unwrap();
        session.load_detail(request).await.unwrap();
        session.change_legacy_type(0, ElementId(3)).unwrap();

        let wrong_type = session
            .pick_move(0, MovePosition::First, MoveId(88))
            .unwrap_err();
        let unknown = session
            .pick_move(0, MovePosition::Second, MoveId(9999))
            .unwrap_err();

        assert!(matches!(
            wrong_type,
            RuntimeError::MoveRejected(PickRejection::NotOffered {
                move_id: MoveId(88)
            })
        ));
        assert_eq!(unknown.error_code(), "PICK_NOT_OFFERED");
        assert_eq!(session.slot(0).unwrap().moves, [MoveId::UNSET; 4]);
        assert!(session.pick_move(0, MovePosition::First, MoveId(77)).is_ok());
    }

    #[test]
    fn nothing_can_be_picked_before_the_detail_arrives() {
        let mut session = session();
        session.select_monster(0, MonsterId(5)).unwrap();

        let err = session
            .pick_move(0, MovePosition::First, MoveId(10))
            .unwrap_err();

        assert!(matches!(err, RuntimeError::MoveRejected(_)));
        // Clearing a position needs no candidates.
        assert!(session.pick_move(0, MovePosition::First, MoveId::UNSET).is_ok());
    }

    #[tokio::test]
    async fn switching_creatures_clears_moves_and_detaches() {
        let mut session = session();
        let request = session.select_monster(0, MonsterId(5)).unwrap().unwrap();
        session.load_detail(request).await.unwrap();
        session.pick_move(0, MovePosition::First, MoveId(10)).unwrap();

        let request = session.select_monster(0, MonsterId(6)).unwrap();

        assert_eq!(
            request,
            Some(DetailRequest {
                slot: 0,
                monster_id: MonsterId(6)
            })
        );
        assert_eq!(session.slot(0).unwrap().moves, [MoveId::UNSET; 4]);
        assert!(session.detail(0).is_none());
    }

    #[test]
    fn fourth_boost_is_rejected() {
        let mut session = session();
        let seven = BoostValue::new(7).unwrap();
        for stat in [StatKey::HpBoost, StatKey::PhyAtkBoost, StatKey::SpdBoost] {
            session.set_talent(1, stat, seven).unwrap();
        }

        let err = session.set_talent(1, StatKey::MagDefBoost, seven).unwrap_err();

        assert!(matches!(err, RuntimeError::Talent(_)));
        assert_eq!(session.slot(1).unwrap().talent.boosted_count(), 3);
    }

    #[test]
    fn save_then_edit_updates_the_same_record() {
        let mut session = session();
        session.set_magic_item(Some(MagicItemId(1)));

        let first = session.save().unwrap();
        session.set_name("Renamed");
        let second = session.save().unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.name.as_deref(), Some("Renamed"));
    }

    #[test]
    fn copy_mode_detaches_from_the_saved_record() {
        let mut session = session();
        session.set_magic_item(Some(MagicItemId(1)));
        session.select_monster(2, MonsterId(5)).unwrap();
        let saved = session.save().unwrap();

        let pending = session.load(saved.id, LoadMode::Copy).unwrap();

        assert_eq!(session.team_id(), None);
        assert_eq!(session.store().name(), "My Team (Copy)");
        assert_eq!(
            pending,
            vec![DetailRequest {
                slot: 2,
                monster_id: MonsterId(5)
            }]
        );
        assert_eq!(session.store().slot_status(2), Ok(SlotStatus::InProgress));
    }

    #[test]
    fn loading_an_unknown_team_fails() {
        let mut session = session();

        let err = session.load(TeamId(42), LoadMode::Edit).unwrap_err();

        assert!(matches!(err, RuntimeError::TeamNotFound(TeamId(42))));
    }
}
