//! File layout of a content directory.

use std::path::{Path, PathBuf};

use team_core::TeamId;

/// Resolves content file paths under a data directory.
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── catalog.ron
/// ├── creatures/
/// │   ├── 1.json
/// │   └── 5.json
/// └── teams/
///     └── team_12.json
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataLayout {
    root: PathBuf,
}

impl DataLayout {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const CATALOG_FILE: &'static str = "catalog.ron";
    pub const CREATURES_DIR: &'static str = "creatures";
    pub const TEAMS_DIR: &'static str = "teams";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> PathBuf {
        self.root.join(Self::CONFIG_FILE)
    }

    pub fn catalog(&self) -> PathBuf {
        self.root.join(Self::CATALOG_FILE)
    }

    pub fn creatures_dir(&self) -> PathBuf {
        self.root.join(Self::CREATURES_DIR)
    }

    pub fn teams_dir(&self) -> PathBuf {
        self.root.join(Self::TEAMS_DIR)
    }

    /// `teams/team_{id}.json`
    pub fn team(&self, id: TeamId) -> PathBuf {
        self.teams_dir().join(team_file_name(id))
    }
}

/// File name of a saved team, shared with the file-backed team repository.
pub fn team_file_name(id: TeamId) -> String {
    format!("team_{}.json", id.0)
}
