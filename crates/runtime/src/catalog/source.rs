use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use team_content::ContentFactory;
use team_core::{
    CatalogError, CatalogOracle, CatalogSnapshot, CreatureDetail, ElementType, MagicItem,
    MonsterId, Personality,
};

/// Remote catalog.
///
/// `Ok(None)` means the source answered and does not know the creature;
/// transport failures are `Err`.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn creature_detail(&self, id: MonsterId) -> Result<Option<CreatureDetail>, CatalogError>;

    async fn personalities(&self) -> Result<Vec<Personality>, CatalogError>;

    async fn types(&self) -> Result<Vec<ElementType>, CatalogError>;

    async fn magic_items(&self) -> Result<Vec<MagicItem>, CatalogError>;
}

/// Serves any [`CatalogOracle`] as a [`CatalogSource`].
pub struct OracleSource<O> {
    oracle: Arc<O>,
}

impl<O: CatalogOracle> OracleSource<O> {
    pub fn new(oracle: Arc<O>) -> Self {
        Self { oracle }
    }
}

impl OracleSource<CatalogSnapshot> {
    /// Loads a snapshot from a content directory.
    pub fn from_content_dir(dir: &Path) -> Result<Self, CatalogError> {
        let snapshot = ContentFactory::new(dir)
            .load_snapshot()
            .map_err(|e| CatalogError::Unavailable(format!("{e:#}")))?;
        tracing::info!(
            "Loaded catalog snapshot from {} ({} creature details)",
            dir.display(),
            snapshot.detail_count()
        );
        Ok(Self::new(Arc::new(snapshot)))
    }
}

#[async_trait]
impl<O: CatalogOracle + 'static> CatalogSource for OracleSource<O> {
    async fn creature_detail(&self, id: MonsterId) -> Result<Option<CreatureDetail>, CatalogError> {
        Ok(self.oracle.creature_detail(id))
    }

    async fn personalities(&self) -> Result<Vec<Personality>, CatalogError> {
        Ok(self.oracle.personalities())
    }

    async fn types(&self) -> Result<Vec<ElementType>, CatalogError> {
        Ok(self.oracle.types())
    }

    async fn magic_items(&self) -> Result<Vec<MagicItem>, CatalogError> {
        Ok(self.oracle.magic_items())
    }
}
