//! Catalog lookup errors.

use crate::error::{BuilderError, ErrorSeverity};
use crate::ids::{MagicItemId, MonsterId, MoveId};

/// Errors raised when catalog data a caller needs is not available.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("creature {0} not found in catalog")]
    CreatureNotFound(MonsterId),

    #[error("move {0} not found in catalog")]
    MoveNotFound(MoveId),

    #[error("magic item {0} not found in catalog")]
    MagicItemNotFound(MagicItemId),

    /// The remote catalog could not be reached or returned garbage.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

impl BuilderError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::External
    }

    fn error_code(&self) -> &'static str {
        match self {
            CatalogError::CreatureNotFound(_) => "CATALOG_CREATURE_NOT_FOUND",
            CatalogError::MoveNotFound(_) => "CATALOG_MOVE_NOT_FOUND",
            CatalogError::MagicItemNotFound(_) => "CATALOG_MAGIC_ITEM_NOT_FOUND",
            CatalogError::Unavailable(_) => "CATALOG_UNAVAILABLE",
        }
    }
}
