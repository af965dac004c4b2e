//! Saved team loader.

use std::path::Path;

use team_core::SavedTeam;

use crate::loaders::{LoadResult, read_file};

/// Loader for saved teams from JSON files.
pub struct SavedTeamLoader;

impl SavedTeamLoader {
    pub fn load(path: &Path) -> LoadResult<SavedTeam> {
        let content = read_file(path)?;
        serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse saved team at {}: {}", path.display(), e))
    }
}
