//! Save a copy of a saved team under a new id.

use anyhow::Result;
use clap::Parser;
use console::style;
use team_core::{LoadMode, TeamId};
use team_runtime::RuntimeConfig;

use crate::context::Context;

/// Save a copy of a saved team under a new id
#[derive(Parser, Debug)]
pub struct Duplicate {
    /// Id of the saved team to copy
    #[arg(value_name = "ID")]
    id: u32,
}

impl Duplicate {
    pub fn execute(self, config: RuntimeConfig) -> Result<()> {
        let mut ctx = Context::new(&config)?;
        ctx.session.load(TeamId(self.id), LoadMode::Copy)?;

        let saved = ctx.session.save()?;
        println!(
            "{} team {} as {} ({})",
            style("Copied").bold().green(),
            self.id,
            saved.id.0,
            ctx.session.store().name()
        );
        Ok(())
    }
}
