//! Runtime configuration loaded from the process environment.

use std::env;
use std::path::PathBuf;

/// Where the runtime reads content from and writes saved teams to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Data directory with `catalog.ron`, `creatures/` and `config.toml`.
    pub content_dir: PathBuf,
    /// Directory holding `team_{id}.json` files.
    pub save_dir: PathBuf,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from(Self::DEFAULT_CONTENT_DIR),
            save_dir: default_save_dir(),
        }
    }
}

impl RuntimeConfig {
    pub const DEFAULT_CONTENT_DIR: &'static str = "./data";

    pub fn new(content_dir: impl Into<PathBuf>, save_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
            save_dir: save_dir.into(),
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TEAM_CONTENT_DIR` - Content data directory (default: `./data`)
    /// - `TEAM_SAVE_DIR` - Saved team directory (default: platform data dir + `/teams`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("TEAM_CONTENT_DIR") {
            config.content_dir = dir;
        }
        if let Some(dir) = read_env::<PathBuf>("TEAM_SAVE_DIR") {
            config.save_dir = dir;
        }

        config
    }
}

/// Platform data directory for saved teams.
///
/// - Linux: `~/.local/share/team-builder/teams`
/// - macOS: `~/Library/Application Support/team-builder/teams`
/// - Fallback: `./save_data/teams`
fn default_save_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "team-builder")
        .map(|dirs| dirs.data_dir().join("teams"))
        .unwrap_or_else(|| PathBuf::from("./save_data/teams"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok().filter(|value| !value.is_empty())?.parse().ok()
}
