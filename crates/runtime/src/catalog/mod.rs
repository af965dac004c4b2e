//! Asynchronous catalog access.
//!
//! [`CatalogSource`] is the remote side: anything that can fetch creature
//! details and the flat catalog lists. [`CatalogCache`] sits in front of it,
//! keeps every fetched detail keyed by creature id together with its resolved
//! [`LegacyIndex`](team_core::LegacyIndex), and hands out `Arc`s so a slot can
//! hold on to a detail without borrowing the cache.
mod cache;
mod source;

pub use cache::{CatalogCache, DetailRequest, FetchedDetail, ResolvedDetail};
pub use source::{CatalogSource, OracleSource};
