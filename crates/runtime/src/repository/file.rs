//! File-based TeamRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use team_content::team_file_name;
use team_core::{SavedTeam, TeamCreate, TeamId};

use super::{RepositoryError, Result, TeamRepository};

/// File-based implementation of TeamRepository.
///
/// Teams are stored as pretty-printed `team_{id}.json` files, the same layout
/// the content loader reads from a data directory. New ids are one past the
/// highest id on disk.
pub struct FileTeamRepo {
    base_dir: PathBuf,
}

impl FileTeamRepo {
    /// Creates the repository, making `base_dir` if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn team_path(&self, id: TeamId) -> PathBuf {
        self.base_dir.join(team_file_name(id))
    }

    fn write(&self, saved: &SavedTeam) -> Result<()> {
        let path = self.team_path(saved.id);
        let temp_path = path.with_extension("json.tmp");

        let bytes =
            serde_json::to_vec_pretty(saved).map_err(|e| RepositoryError::Json(e.to_string()))?;

        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Saved team[{}] to {}", saved.id.0, path.display());
        Ok(())
    }
}

impl TeamRepository for FileTeamRepo {
    fn create(&self, team: &TeamCreate) -> Result<SavedTeam> {
        let next = self
            .list_ids()?
            .last()
            .map_or(1, |TeamId(highest)| highest + 1);
        let saved = SavedTeam::from_create(TeamId(next), team.clone());
        self.write(&saved)?;
        Ok(saved)
    }

    fn update(&self, id: TeamId, team: &TeamCreate) -> Result<SavedTeam> {
        if !self.exists(id) {
            return Err(RepositoryError::NotFound(id));
        }
        let saved = SavedTeam::from_create(id, team.clone());
        self.write(&saved)?;
        Ok(saved)
    }

    fn load(&self, id: TeamId) -> Result<Option<SavedTeam>> {
        let path = self.team_path(id);

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path)?;
        let saved: SavedTeam =
            serde_json::from_slice(&bytes).map_err(|e| RepositoryError::Json(e.to_string()))?;

        tracing::debug!("Loaded team[{}] from {}", id.0, path.display());
        Ok(Some(saved))
    }

    fn exists(&self, id: TeamId) -> bool {
        self.team_path(id).exists()
    }

    fn delete(&self, id: TeamId) -> Result<()> {
        let path = self.team_path(id);

        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!("Deleted team[{}]", id.0);
        }

        Ok(())
    }

    fn list_ids(&self) -> Result<Vec<TeamId>> {
        let mut ids = Vec::new();

        for entry in fs::read_dir(&self.base_dir)? {
            let path = entry?.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(id_str) = filename
                    .strip_prefix("team_")
                    .and_then(|s| s.strip_suffix(".json"))
                && let Ok(id) = id_str.parse::<u32>()
            {
                ids.push(TeamId(id));
            }
        }

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
            magic_item_id: MagicItemId(2),
            user_monsters: vec![Slot::default(); 6],
        }
    }

    #[test]
    fn create_then_load_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileTeamRepo::new(dir.path()).unwrap();

        let saved = repo.create(&payload("Stored")).unwrap();

        assert_eq!(saved.id, TeamId(1));
        assert!(dir.path().join("team_1.json").exists());
        assert_eq!(repo.load(saved.id).unwrap(), Some(saved));
    }

    #[test]
    fn ids_continue_after_the_highest_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("team_7.json"), "{\"id\": 7}").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        let repo = FileTeamRepo::new(dir.path()).unwrap();

        let saved = repo.create(&payload("Next")).unwrap();

        assert_eq!(saved.id, TeamId(8));
        assert_eq!(repo.list_ids().unwrap(), vec![TeamId(7), TeamId(8)]);
    }

    #[test]
    fn update_of_missing_team_fails() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileTeamRepo::new(dir.path()).unwrap();

        let err = repo.update(TeamId(3), &payload("Ghost")).unwrap_err();

        assert!(matches!(err, RepositoryError::NotFound(TeamId(3))));
        assert!(!repo.exists(TeamId(3)));
    }

    #[test]
    fn corrupt_file_is_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("team_1.json"), "not json").unwrap();
        let repo = FileTeamRepo::new(dir.path()).unwrap();

        assert!(matches!(
            repo.load(TeamId(1)),
            Err(RepositoryError::Json(_))
        ));
    }
}
