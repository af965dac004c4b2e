//! Content loaders for reading builder data from files.
//!
//! Each loader converts one file format into team-core types. The
//! [`ContentFactory`] ties them to a [`DataLayout`](crate::DataLayout).

pub mod catalog;
pub mod config;
pub mod creature;
pub mod factory;
pub mod team;

pub use catalog::{CatalogFile, CatalogLoader};
pub use config::ConfigLoader;
pub use creature::CreatureDetailLoader;
pub use factory::ContentFactory;
pub use team::SavedTeamLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
