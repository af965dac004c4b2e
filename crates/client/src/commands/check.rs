//! Report per-slot violations and submission readiness.

use anyhow::{Context as _, Result};
use clap::Parser;
use console::style;
use team_core::{CatalogOracle, LoadMode, SlotStatus, TeamReport, slot_status};
use team_runtime::RuntimeConfig;

use crate::context::{Context, TeamRef};

/// Report per-slot violations and submission readiness
#[derive(Parser, Debug)]
pub struct Check {
    /// Saved team id or path to a team JSON file
    #[arg(value_name = "TEAM")]
    team: TeamRef,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum OutputFormat {
    /// One line per slot with hints
    Summary,
    /// Machine-readable report
    Json,
}

impl Check {
    pub async fn execute(self, config: RuntimeConfig) -> Result<()> {
        let mut ctx = Context::new(&config)?;
        ctx.open(&self.team, LoadMode::Edit).await?;

        let report = ctx.session.validate();
        match self.format {
            OutputFormat::Summary => print_summary(&ctx, &report),
            OutputFormat::Json => print_json(&ctx, &report)?,
        }
        Ok(())
    }
}

fn print_summary(ctx: &Context, report: &TeamReport) {
    let store = ctx.session.store();

    println!("{} {}", style("Team:").bold().cyan(), store.name());
    match store.magic_item_id() {
        Some(id) => {
            let name = ctx
                .snapshot
                .magic_items()
                .into_iter()
                .find(|item| item.id == id)
                .map_or_else(|| id.to_string(), |item| item.name);
            println!("{} {}", style("Magic item:").bold().cyan(), name);
        }
        None => println!("{} {}", style("Magic item:").bold().cyan(), style("none").red()),
    }
    println!();

    for (index, (slot, violations)) in store.slots().iter().zip(&report.slots).enumerate() {
        let status = slot_status(slot);
        let label = match status {
            SlotStatus::Complete => style(status.to_string()).green(),
            SlotStatus::InProgress => style(status.to_string()).yellow(),
            SlotStatus::Empty => style(status.to_string()).dim(),
        };
        let creature = if slot.is_empty() {
            "-".to_owned()
        } else {
            ctx.creature_name(slot.monster_id)
        };

        println!("  Slot {}  [{}] {}", index + 1, label, creature);
        for violation in violations {
            println!("      {} {}", style("•").red(), violation.message());
        }
    }
    println!();

    match ctx.session.store().prepare_submission() {
        Ok(_) => println!("{}", style("Ready to submit").bold().green()),
        Err(e) => println!("{} {}", style("Not ready:").bold().red(), e),
    }
}

fn print_json(ctx: &Context, report: &TeamReport) -> Result<()> {
    let store = ctx.session.store();
    let slots: Vec<_> = store
        .slots()
        .iter()
        .zip(&report.slots)
        .enumerate()
        .map(|(index, (slot, violations))| {
            serde_json::json!({
                "slot": index + 1,
                "monster_id": slot.monster_id.0,
                "status": slot_status(slot).to_string(),
                "violations": violations.iter().map(ToString::to_string).collect::<Vec<_>>(),
            })
        })
        .collect();

    let json = serde_json::json!({
        "name": store.name(),
        "magic_item_id": store.magic_item_id().map(|id| id.0),
        "submittable": report.is_submittable(),
        "slots": slots,
    });
    let text = serde_json::to_string_pretty(&json).context("Failed to serialize report")?;
    println!("{}", text);
    Ok(())
}
