//! Runtime orchestration for the team builder.
//!
//! This crate wires the pure rules of `team-core` to the outside world: an
//! asynchronous catalog behind a read-through cache, the analysis service, and
//! a repository for saved teams. Consumers hold a [`BuilderSession`] and drive
//! every edit through it.
//!
//! Modules are organized by responsibility:
//! - [`session`] owns the team store and applies engine patches
//! - [`catalog`] fetches and caches creature details with their legacy index
//! - [`analysis`] defines the analysis collaborator
//! - [`repository`] persists saved teams in memory or on disk
//! - [`config`] reads runtime settings from the environment
pub mod analysis;
pub mod catalog;
pub mod config;
pub mod error;
pub mod repository;
pub mod session;

pub use analysis::{AnalysisReport, AnalysisService, LocalAnalysis, ServiceError};
pub use catalog::{
    CatalogCache, CatalogSource, DetailRequest, FetchedDetail, OracleSource, ResolvedDetail,
};
pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use repository::{FileTeamRepo, InMemoryTeamRepo, RepositoryError, TeamRepository};
pub use session::BuilderSession;
