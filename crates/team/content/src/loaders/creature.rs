//! Creature detail loader.
//!
//! Detail files use the catalog service's JSON shape, so the lenient legacy
//! parsing in team-core applies to them unchanged.

use std::path::Path;

use team_core::CreatureDetail;

use crate::loaders::{LoadResult, read_file};

/// Loader for creature detail records from JSON files.
pub struct CreatureDetailLoader;

impl CreatureDetailLoader {
    pub fn load(path: &Path) -> LoadResult<CreatureDetail> {
        let content = read_file(path)?;
        serde_json::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse creature detail at {}: {}", path.display(), e)
        })
    }

    /// Loads every `*.json` file in `dir`, sorted by file name.
    pub fn load_dir(dir: &Path) -> LoadResult<Vec<CreatureDetail>> {
        let entries = std::fs::read_dir(dir)
            .map_err(|e| anyhow::anyhow!("Failed to read directory {}: {}", dir.display(), e))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        paths.iter().map(|path| Self::load(path)).collect()
    }
}
