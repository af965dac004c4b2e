//! Team builder command line tool.
//!
//! Loads catalog content and saved teams, then reports what a team still
//! needs before it can be submitted.
//!
//! # Examples
//!
//! ```bash
//! # Per-slot violations for a saved team file
//! team-builder check crates/team/content/data/teams/team_2.json
//!
//! # Candidate moves for slot 1, position 2 of saved team 1
//! team-builder candidates 1 1 --position 2
//! ```

mod commands;
mod context;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Analyze, Candidates, Check, Delete, Duplicate, List};
use team_runtime::RuntimeConfig;

/// Team builder tools
#[derive(Parser)]
#[command(name = "team-builder")]
#[command(about = "Inspect and validate creature teams", long_about = None)]
#[command(version)]
struct Cli {
    /// Content directory (overrides TEAM_CONTENT_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    content_dir: Option<PathBuf>,

    /// Saved team directory (overrides TEAM_SAVE_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    save_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Report per-slot violations and submission readiness
    Check(Check),

    /// List candidate moves for a slot
    Candidates(Candidates),

    /// Run the offline analysis on a complete team
    Analyze(Analyze),

    /// List saved teams
    List(List),

    /// Save a copy of a saved team under a new id
    Duplicate(Duplicate),

    /// Delete a saved team
    Delete(Delete),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = RuntimeConfig::from_env();
    if let Some(dir) = cli.content_dir {
        config.content_dir = dir;
    }
    if let Some(dir) = cli.save_dir {
        config.save_dir = dir;
    }

    match cli.command {
        Command::Check(cmd) => cmd.execute(config).await,
        Command::Candidates(cmd) => cmd.execute(config).await,
        Command::Analyze(cmd) => cmd.execute(config).await,
        Command::List(cmd) => cmd.execute(config),
        Command::Duplicate(cmd) => cmd.execute(config),
        Command::Delete(cmd) => cmd.execute(config),
    }
}
