//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use eyre::Result;

#[derive(Debug, Parser)]
#[command(name = "ral")]
#[command(about = "Align timed transcripts with document text and replay the highlight track")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Align a timed transcript against document text
    Align(crate::align::Args),

    /// Replay the highlight track with a simulated playback clock
    Follow(crate::follow::Args),
}

/// Execute CLI command - separated for testing.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Align(args) => crate::align::execute(args.try_into()?),
        Commands::Follow(args) => crate::follow::execute(args.try_into()?),
    }
}
