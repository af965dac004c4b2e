//! Data-driven catalog content and loaders.
//!
//! This crate reads builder content from a data directory:
//! - Catalog lists (creatures, personalities, types, magic items) via RON
//! - Creature detail records in the catalog service's JSON wire shape
//! - Saved teams as JSON
//! - Builder configuration via TOML
//!
//! Everything is decoded straight into team-core types; nothing here knows
//! about slots being edited.

pub mod layout;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use layout::{DataLayout, team_file_name};

#[cfg(feature = "loaders")]
pub use loaders::{
    CatalogFile, CatalogLoader, ConfigLoader, ContentFactory, CreatureDetailLoader, LoadResult,
    SavedTeamLoader,
};
