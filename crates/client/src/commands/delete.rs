//! Delete a saved team.

use anyhow::Result;
use clap::Parser;
use console::style;
use team_core::TeamId;
use team_runtime::RuntimeConfig;

use crate::context::Context;

/// Delete a saved team
#[derive(Parser, Debug)]
pub struct Delete {
    /// Id of the saved team to delete
    #[arg(value_name = "ID")]
    id: u32,
}

impl Delete {
    pub fn execute(self, config: RuntimeConfig) -> Result<()> {
        let mut ctx = Context::new(&config)?;
        ctx.session.delete(TeamId(self.id))?;

        println!("{} team {}", style("Deleted").bold().green(), self.id);
        Ok(())
    }
}
