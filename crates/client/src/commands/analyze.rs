//! Run the offline analysis on a complete team.

use anyhow::{Context as _, Result};
use clap::Parser;
use team_core::LoadMode;
use team_runtime::RuntimeConfig;

use crate::context::{Context, TeamRef};

/// Run the offline analysis on a complete team
#[derive(Parser, Debug)]
pub struct Analyze {
    /// Saved team id or path to a team JSON file
    #[arg(value_name = "TEAM")]
    team: TeamRef,
}

impl Analyze {
    pub async fn execute(self, config: RuntimeConfig) -> Result<()> {
        let mut ctx = Context::new(&config)?;
        ctx.open(&self.team, LoadMode::Edit).await?;

        let report = ctx.session.analyze().await?;
        let text = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", text);
        Ok(())
    }
}
