//! Catalog list loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use team_core::{Creature, ElementType, MagicItem, Move, Personality};

use crate::loaders::{LoadResult, read_file};

/// Catalog structure for RON files.
///
/// Moves listed here are lookups only; which creature learns what comes from
/// the per-creature detail records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogFile {
    pub creatures: Vec<Creature>,
    pub personalities: Vec<Personality>,
    pub types: Vec<ElementType>,
    pub magic_items: Vec<MagicItem>,
    pub moves: Vec<Move>,
}

/// Loader for catalog lists from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn load(path: &Path) -> LoadResult<CatalogFile> {
        let content = read_file(path)?;
        ron::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse catalog RON at {}: {}", path.display(), e)
        })
    }
}
