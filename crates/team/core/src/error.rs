//! Common error infrastructure for team-core.
//!
//! Domain-specific errors (e.g. `TalentError`, `TeamError`) are defined next to
//! the rules they enforce. This module provides the severity classification and
//! the trait they all implement.
//!
//! Slot validation findings are deliberately *not* errors: they are values
//! ([`crate::engine::Violation`]) surfaced as hints and re-derived on every
//! evaluation.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Nothing in the builder is fatal to the process; every failure is either
/// corrected by a further edit or displayed and left for the user to resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Rejected mutation that left state untouched.
    ///
    /// Examples: talent cap hit, duplicate move pick
    Rejected,

    /// Invalid input or unmet precondition, fix before retrying.
    ///
    /// Examples: missing magic item, slot index out of range
    Validation,

    /// Failure reported by an external collaborator, passed through verbatim.
    ///
    /// Examples: analysis service rejected the payload, catalog unreachable
    External,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rejected => "rejected",
            Self::Validation => "validation",
            Self::External => "external",
        }
    }

    /// Returns true if the failed operation left all state unchanged.
    pub const fn is_state_preserving(&self) -> bool {
        matches!(self, Self::Rejected | Self::Validation)
    }
}

/// Common trait for all builder errors.
///
/// - All error enums implement this trait
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Classify severity by how the caller recovers, not by impact
pub trait BuilderError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a stable identifier for this error variant.
    ///
    /// Used for display lookups and assertions. Defaults to the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
