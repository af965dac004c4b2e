use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{OnceCell, RwLock};

use team_core::{
    CatalogError, CreatureDetail, ElementType, LegacyIndex, MagicItem, MonsterId, Personality,
    extract_legacy_info,
};

use super::CatalogSource;

/// A creature detail together with its legacy index, resolved once per fetch.
#[derive(Debug)]
pub struct ResolvedDetail {
    pub detail: CreatureDetail,
    pub legacy: LegacyIndex,
}

impl ResolvedDetail {
    pub fn new(detail: CreatureDetail) -> Self {
        let legacy = extract_legacy_info(&detail);
        Self { detail, legacy }
    }
}

/// A detail fetch issued for one slot.
///
/// Carries the creature id the fetch was issued for so the result can be
/// checked against the slot when it comes back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DetailRequest {
    pub slot: usize,
    pub monster_id: MonsterId,
}

/// Result of resolving a [`DetailRequest`].
#[derive(Clone, Debug)]
pub struct FetchedDetail {
    pub request: DetailRequest,
    pub resolved: Arc<ResolvedDetail>,
}

/// Read-through cache over a [`CatalogSource`].
pub struct CatalogCache {
    source: Arc<dyn CatalogSource>,
    details: RwLock<HashMap<MonsterId, Arc<ResolvedDetail>>>,
    personalities: OnceCell<Vec<Personality>>,
    types: OnceCell<Vec<ElementType>>,
    magic_items: OnceCell<Vec<MagicItem>>,
}

impl CatalogCache {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            details: RwLock::new(HashMap::new()),
            personalities: OnceCell::new(),
            types: OnceCell::new(),
            magic_items: OnceCell::new(),
        }
    }

    /// Returns the detail for `id`, fetching it on a miss.
    ///
    /// # Errors
    ///
    /// `CatalogError::CreatureNotFound` if the source does not know `id`;
    /// source failures are passed through. Failed fetches are not cached.
    pub async fn detail(&self, id: MonsterId) -> Result<Arc<ResolvedDetail>, CatalogError> {
        if let Some(hit) = self.cached_detail(id).await {
            tracing::debug!("Catalog cache hit for creature {}", id);
            return Ok(hit);
        }

        tracing::debug!("Catalog cache miss for creature {}, fetching", id);
        let detail = match self.source.creature_detail(id).await {
            Ok(Some(detail)) => detail,
            Ok(None) => return Err(CatalogError::CreatureNotFound(id)),
            Err(e) => {
                tracing::warn!("Failed to fetch creature {}: {}", id, e);
                return Err(e);
            }
        };

        let resolved = ResolvedDetail::new(detail);
        if resolved.legacy.skipped() > 0 {
            tracing::warn!(
                "Skipped {} malformed legacy entries for creature {}",
                resolved.legacy.skipped(),
                id
            );
        }

        let mut details = self.details.write().await;
        // A concurrent fetch may have landed first; keep the existing entry.
        let entry = details.entry(id).or_insert_with(|| Arc::new(resolved));
        Ok(Arc::clone(entry))
    }

    /// Returns the detail for `id` only if it is already cached.
    pub async fn cached_detail(&self, id: MonsterId) -> Option<Arc<ResolvedDetail>> {
        self.details.read().await.get(&id).cloned()
    }

    /// Resolves a slot's detail request.
    pub async fn fetch(&self, request: DetailRequest) -> Result<FetchedDetail, CatalogError> {
        let resolved = self.detail(request.monster_id).await?;
        Ok(FetchedDetail { request, resolved })
    }

    pub async fn personalities(&self) -> Result<&[Personality], CatalogError> {
        self.personalities
            .get_or_try_init(|| self.source.personalities())
            .await
            .map(Vec::as_slice)
    }

    pub async fn types(&self) -> Result<&[ElementType], CatalogError> {
        self.types
            .get_or_try_init(|| self.source.types())
            .await
            .map(Vec::as_slice)
    }

    pub async fn magic_items(&self) -> Result<&[MagicItem], CatalogError> {
        self.magic_items
            .get_or_try_init(|| self.source.magic_items())
            .await
            .map(Vec::as_slice)
    }

    /// Number of cached creature details.
    pub async fn len(&self) -> usize {
        self.details.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.details.read().await.is_empty()
    }
}
