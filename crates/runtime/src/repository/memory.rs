//! In-memory TeamRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use team_core::{SavedTeam, TeamCreate, TeamId};

use super::{RepositoryError, Result, TeamRepository};

/// In-memory implementation of TeamRepository.
///
/// Ids are assigned sequentially starting at 1.
pub struct InMemoryTeamRepo {
    inner: RwLock<Inner>,
}

struct Inner {
    teams: HashMap<TeamId, SavedTeam>,
    next_id: u32,
}

impl InMemoryTeamRepo {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                teams: HashMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryTeamRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TeamRepository for InMemoryTeamRepo {
    fn create(&self, team: &TeamCreate) -> Result<SavedTeam> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let id = TeamId(inner.next_id);
        inner.next_id += 1;

        let saved = SavedTeam::from_create(id, team.clone());
        inner.teams.insert(id, saved.clone());
        Ok(saved)
    }

    fn update(&self, id: TeamId, team: &TeamCreate) -> Result<SavedTeam> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let Some(slot) = inner.teams.get_mut(&id) else {
            return Err(RepositoryError::NotFound(id));
        };

        *slot = SavedTeam::from_create(id, team.clone());
        Ok(slot.clone())
    }

    fn load(&self, id: TeamId) -> Result<Option<SavedTeam>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(inner.teams.get(&id).cloned())
    }

    fn exists(&self, id: TeamId) -> bool {
        self.inner
            .read()
            .map(|inner| inner.teams.contains_key(&id))
            .unwrap_or(false)
    }

    fn delete(&self, id: TeamId) -> Result<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        inner.teams.remove(&id);
        Ok(())
    }

    fn list_ids(&self) -> Result<Vec<TeamId>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut ids: Vec<TeamId> = inner.teams.keys().copied().collect();
        ids.sort_unstable();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use team_core::{MagicItemId, Slot};

    use super::*;

    fn payload(name: &str) -> TeamCreate {
        TeamCreate {
            name: name.to_owned(),
            magic_item_id: MagicItemId(1),
            user_monsters: vec![Slot::default(); 6],
        }
    }

    #[test]
    fn create_assigns_sequential_ids() {
        let repo = InMemoryTeamRepo::new();

        let first = repo.create(&payload("A")).unwrap();
        let second = repo.create(&payload("B")).unwrap();

        assert_eq!(first.id, TeamId(1));
        assert_eq!(second.id, TeamId(2));
        assert_eq!(repo.list_ids().unwrap(), vec![TeamId(1), TeamId(2)]);
    }

    #[test]
    fn update_requires_an_existing_team() {
        let repo = InMemoryTeamRepo::new();
        let saved = repo.create(&payload("A")).unwrap();

        let updated = repo.update(saved.id, &payload("Renamed")).unwrap();
        assert_eq!(updated.name.as_deref(), Some("Renamed"));

        let err = repo.update(TeamId(9), &payload("X")).unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(TeamId(9))));
    }

    #[test]
    fn delete_is_idempotent() {
        let repo = InMemoryTeamRepo::new();
        let saved = repo.create(&payload("A")).unwrap();

        repo.delete(saved.id).unwrap();
        repo.delete(saved.id).unwrap();

        assert!(!repo.exists(saved.id));
        assert_eq!(repo.load(saved.id).unwrap(), None);
    }
}
