//! Builder configuration loader.

use std::path::Path;

use team_core::BuilderConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for builder configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<BuilderConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML at {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<BuilderConfig> {
        Ok(toml::from_str(content)?)
    }
}
