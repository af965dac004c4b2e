//! Team state and the submission payload.
mod payload;
mod store;

pub use payload::{SavedTeam, TeamCreate};
pub use store::{LoadMode, TeamReport, TeamStore};

use crate::config::TeamRules;
use crate::error::{BuilderError, ErrorSeverity};

/// Errors raised by [`TeamStore`] operations. None of them mutate the store.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TeamError {
    #[error("slot index {index} is out of range (team has {len} slots)", len = TeamRules::TEAM_SIZE)]
    SlotOutOfRange { index: usize },

    #[error("a magic item must be chosen before submitting")]
    MissingMagicItem,

    /// One or more slots still have violations.
    #[error("slots {slots:?} are incomplete")]
    IncompleteTeam { slots: Vec<usize> },

    /// A saved team did not carry exactly one entry per slot.
    #[error("expected {expected} slots, found {found}")]
    SlotCount { expected: usize, found: usize },
}

impl BuilderError for TeamError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            TeamError::SlotOutOfRange { .. } => "TEAM_SLOT_OUT_OF_RANGE",
            TeamError::MissingMagicItem => "TEAM_MISSING_MAGIC_ITEM",
            TeamError::IncompleteTeam { .. } => "TEAM_INCOMPLETE",
            TeamError::SlotCount { .. } => "TEAM_SLOT_COUNT",
        }
    }
}
