//! List candidate moves for a slot.

use anyhow::{Result, bail};
use clap::Parser;
use console::style;
use team_core::{LoadMode, MovePosition, TeamRules};
use team_runtime::RuntimeConfig;

use crate::context::{Context, TeamRef};

/// List candidate moves for a slot
#[derive(Parser, Debug)]
pub struct Candidates {
    /// Saved team id or path to a team JSON file
    #[arg(value_name = "TEAM")]
    team: TeamRef,

    /// Slot number (1-6)
    #[arg(value_name = "SLOT")]
    slot: usize,

    /// Move position (1-4); marks which candidates can be picked there
    #[arg(short, long, value_name = "N")]
    position: Option<u8>,
}

impl Candidates {
    pub async fn execute(self, config: RuntimeConfig) -> Result<()> {
        if !(1..=TeamRules::TEAM_SIZE).contains(&self.slot) {
            bail!("Slot must be between 1 and {}", TeamRules::TEAM_SIZE);
        }
        let index = self.slot - 1;
        let position = match self.position {
            Some(number) => match MovePosition::from_number(number) {
                Some(position) => Some(position),
                None => bail!("Position must be between 1 and {}", TeamRules::MOVES_PER_SLOT),
            },
            None => None,
        };

        let mut ctx = Context::new(&config)?;
        ctx.open(&self.team, LoadMode::Edit).await?;

        let slot = ctx.session.slot(index)?;
        if slot.is_empty() {
            println!("Slot {} has no creature.", self.slot);
            return Ok(());
        }
        println!(
            "{} {} (slot {})",
            style("Candidates for").bold().cyan(),
            ctx.creature_name(slot.monster_id),
            self.slot
        );

        let Some(resolved) = ctx.session.detail(index) else {
            println!("  {}", style("creature detail unavailable").dim());
            return Ok(());
        };
        let legacy = &resolved.legacy;

        let rows = match position {
            Some(position) => ctx.session.pickable(index, position)?,
            None => ctx
                .session
                .candidates(index)?
                .into_iter()
                .map(|candidate| (candidate, true))
                .collect(),
        };

        for (candidate, pickable) in rows {
            let tag = match legacy.type_for_move(candidate.move_id) {
                Some(type_id) if candidate.is_legacy => format!(" [legacy, type {type_id}]"),
                _ => String::new(),
            };
            let line = format!(
                "{:>6}  {}{}",
                candidate.move_id.0,
                ctx.move_name(candidate.move_id),
                tag
            );
            if pickable {
                println!("  {}", line);
            } else {
                println!("  {} {}", style(line).dim(), style("(blocked)").red());
            }
        }
        Ok(())
    }
}
