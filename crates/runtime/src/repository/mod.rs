//! Persistence for saved teams.
//!
//! Repositories own the id space: `create` assigns a fresh [`TeamId`](team_core::TeamId),
//! `update` overwrites an existing record. Static catalog content is served by
//! the catalog source, not by repositories.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileTeamRepo;
pub use memory::InMemoryTeamRepo;
pub use traits::TeamRepository;
