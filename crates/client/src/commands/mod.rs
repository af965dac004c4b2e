//! Command implementations.
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod analyze;
mod candidates;
mod check;
mod delete;
mod duplicate;
mod list;

pub use analyze::Analyze;
pub use candidates::Candidates;
pub use check::Check;
pub use delete::Delete;
pub use duplicate::Duplicate;
pub use list::List;
