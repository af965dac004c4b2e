//! Unified error type surfaced by the runtime API.
//!
//! Wraps rule rejections from team-core, catalog and analysis failures, and
//! repository errors so callers can bubble them up with consistent context.
use thiserror::Error;

use team_core::{
    BuilderError, CatalogError, ErrorSeverity, PickRejection, TalentError, TeamError, TeamId,
};

pub use crate::analysis::ServiceError;
pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Team(#[from] TeamError),

    #[error(transparent)]
    Talent(#[from] TalentError),

    #[error("move rejected: {0}")]
    MoveRejected(#[from] PickRejection),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("saved team {0} not found")]
    TeamNotFound(TeamId),
}

impl BuilderError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Team(e) => e.severity(),
            RuntimeError::Talent(e) => e.severity(),
            RuntimeError::MoveRejected(e) => e.severity(),
            RuntimeError::Catalog(e) => e.severity(),
            RuntimeError::Service(_) | RuntimeError::Repository(_) => ErrorSeverity::External,
            RuntimeError::TeamNotFound(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::Team(e) => e.error_code(),
            RuntimeError::Talent(e) => e.error_code(),
            RuntimeError::MoveRejected(e) => e.error_code(),
            RuntimeError::Catalog(e) => e.error_code(),
            RuntimeError::Service(_) => "RUNTIME_SERVICE",
            RuntimeError::Repository(_) => "RUNTIME_REPOSITORY",
            RuntimeError::TeamNotFound(_) => "RUNTIME_TEAM_NOT_FOUND",
        }
    }
}
