//! List saved teams.

use anyhow::Result;
use clap::Parser;
use console::style;
use team_runtime::{RuntimeConfig, TeamRepository};

use crate::context::Context;

/// List saved teams
#[derive(Parser, Debug)]
pub struct List {}

impl List {
    pub fn execute(self, config: RuntimeConfig) -> Result<()> {
        let ctx = Context::new(&config)?;
        let ids = ctx.repository.list_ids()?;

        println!(
            "{} {}",
            style("Saved teams in").bold().cyan(),
            ctx.repository.base_dir().display()
        );
        if ids.is_empty() {
            println!("  {}", style("none").dim());
            return Ok(());
        }

        for id in ids {
            match ctx.repository.load(id) {
                Ok(Some(saved)) => {
                    let name = saved.name.as_deref().unwrap_or("(unnamed)");
                    let filled = saved
                        .user_monsters
                        .iter()
                        .filter(|slot| !slot.is_empty())
                        .count();
                    println!("  {:>4}  {}  ({} creatures)", id.0, name, filled);
                }
                Ok(None) => {}
                Err(e) => println!("  {:>4}  {}", id.0, style(e).red()),
            }
        }
        Ok(())
    }
}
