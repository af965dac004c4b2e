//! Content factory for building a catalog snapshot from data files.

use std::path::Path;

use team_core::{BuilderConfig, CatalogSnapshot, SavedTeam, TeamId};

use crate::layout::DataLayout;
use crate::loaders::{
    CatalogFile, CatalogLoader, ConfigLoader, CreatureDetailLoader, LoadResult, SavedTeamLoader,
};

/// Content factory that loads all builder content from a data directory.
///
/// See [`DataLayout`] for the expected directory structure.
pub struct ContentFactory {
    layout: DataLayout,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<std::path::PathBuf>) -> Self {
        Self {
            layout: DataLayout::new(data_dir),
        }
    }

    /// Load builder configuration from `config.toml`, or the defaults if the
    /// file does not exist.
    pub fn load_config(&self) -> LoadResult<BuilderConfig> {
        let path = self.layout.config();
        if !path.exists() {
            return Ok(BuilderConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load catalog lists from `catalog.ron`.
    pub fn load_catalog(&self) -> LoadResult<CatalogFile> {
        CatalogLoader::load(&self.layout.catalog())
    }

    /// Load a saved team from `teams/team_{id}.json`.
    pub fn load_team(&self, id: TeamId) -> LoadResult<SavedTeam> {
        SavedTeamLoader::load(&self.layout.team(id))
    }

    /// Assembles a snapshot from the catalog file and every creature detail.
    pub fn load_snapshot(&self) -> LoadResult<CatalogSnapshot> {
        let catalog = self.load_catalog()?;
        let creatures_dir = self.layout.creatures_dir();
        let details = if creatures_dir.is_dir() {
            CreatureDetailLoader::load_dir(&creatures_dir)?
        } else {
            Vec::new()
        };

        let mut snapshot = CatalogSnapshot::new()
            .with_personalities(catalog.personalities)
            .with_types(catalog.types)
            .with_magic_items(catalog.magic_items);
        for creature in catalog.creatures {
            snapshot.insert_creature(creature);
        }
        for info in catalog.moves {
            snapshot.insert_move(info);
        }
        for detail in details {
            snapshot.insert_detail(detail);
        }
        Ok(snapshot)
    }

    pub fn layout(&self) -> &DataLayout {
        &self.layout
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        self.layout.root()
    }
}
