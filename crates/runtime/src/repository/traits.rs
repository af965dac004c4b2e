//! Repository contract for saved teams.

use team_core::{SavedTeam, TeamCreate, TeamId};

use super::Result;

/// Stores submission payloads under repository-assigned ids.
pub trait TeamRepository: Send + Sync {
    /// Stores a new team and returns it with its assigned id.
    fn create(&self, team: &TeamCreate) -> Result<SavedTeam>;

    /// Replaces the team stored under `id`.
    ///
    /// Fails with [`RepositoryError::NotFound`](super::RepositoryError::NotFound)
    /// if nothing is stored there.
    fn update(&self, id: TeamId, team: &TeamCreate) -> Result<SavedTeam>;

    fn load(&self, id: TeamId) -> Result<Option<SavedTeam>>;

    fn exists(&self, id: TeamId) -> bool;

    /// Removes the team. Deleting a missing id is not an error.
    fn delete(&self, id: TeamId) -> Result<()>;

    /// All stored ids in ascending order.
    fn list_ids(&self) -> Result<Vec<TeamId>>;
}
