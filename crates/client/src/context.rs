//! Wiring shared by every command: content, catalog, repository, session.

use std::convert::Infallible;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use team_content::{ContentFactory, SavedTeamLoader};
use team_core::{CatalogOracle, CatalogSnapshot, LoadMode, MonsterId, MoveId, TeamId};
use team_runtime::{
    BuilderSession, CatalogCache, FileTeamRepo, LocalAnalysis, OracleSource, RuntimeConfig,
};

/// A team given on the command line: a saved id or a path to a JSON file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TeamRef {
    Saved(TeamId),
    File(PathBuf),
}

impl FromStr for TeamRef {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<u32>() {
            Ok(id) => TeamRef::Saved(TeamId(id)),
            Err(_) => TeamRef::File(PathBuf::from(s)),
        })
    }
}

pub struct Context {
    pub snapshot: Arc<CatalogSnapshot>,
    pub repository: Arc<FileTeamRepo>,
    pub session: BuilderSession,
}

impl Context {
    pub fn new(config: &RuntimeConfig) -> Result<Self> {
        let factory = ContentFactory::new(&config.content_dir);
        let builder_config = factory.load_config()?;
        let snapshot = Arc::new(factory.load_snapshot()?);
        tracing::debug!(
            "Loaded {} creature details from {}",
            snapshot.detail_count(),
            config.content_dir.display()
        );

        let source = OracleSource::new(Arc::clone(&snapshot));
        let catalog = Arc::new(CatalogCache::new(Arc::new(source)));
        let repository = Arc::new(FileTeamRepo::new(&config.save_dir).with_context(|| {
            format!("Failed to open save directory: {}", config.save_dir.display())
        })?);

        let session = BuilderSession::new(
            builder_config,
            catalog,
            Arc::new(LocalAnalysis),
            repository.clone(),
        );

        Ok(Self {
            snapshot,
            repository,
            session,
        })
    }

    /// Opens `team` in the session and fetches details for its creatures.
    ///
    /// Creatures missing from the catalog are logged and left without a
    /// detail, so their candidate lists stay empty.
    pub async fn open(&mut self, team: &TeamRef, mode: LoadMode) -> Result<()> {
        let pending = match team {
            TeamRef::Saved(id) => self.session.load(*id, mode)?,
            TeamRef::File(path) => {
                let saved = SavedTeamLoader::load(path)?;
                self.session.open(&saved, mode)?;
                self.session.pending_details()
            }
        };

        for request in pending {
            if let Err(e) = self.session.load_detail(request).await {
                tracing::warn!("No detail for slot {}: {}", request.slot + 1, e);
            }
        }
        Ok(())
    }

    pub fn creature_name(&self, id: MonsterId) -> String {
        self.snapshot
            .creature(id)
            .map_or_else(|| format!("creature {id}"), |creature| creature.name)
    }

    pub fn move_name(&self, id: MoveId) -> String {
        self.snapshot
            .move_info(id)
            .map_or_else(|| format!("move {id}"), |info| info.name)
    }
}
