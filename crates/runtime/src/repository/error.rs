//! Error types raised by repository implementations.

use thiserror::Error;

use team_core::TeamId;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("team repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("team {0} does not exist")]
    NotFound(TeamId),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
