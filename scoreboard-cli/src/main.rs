//! Scoreboard — replay a live match feed and print the ranked board.
//!
//! # Usage
//!
//! ```text
//! scoreboard replay <FEED> [--json] [--strict]
//! scoreboard replay - < feed.yaml
//! ```
//!
//! Diagnostics go to stderr; set `RUST_LOG=debug` to see every applied event.

mod commands;
mod feed;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::replay::ReplayArgs;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "scoreboard",
    version,
    about = "Track live matches and print a ranked scoreboard",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply a YAML match feed to a fresh board and print the summary.
    Replay(ReplayArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Replay(args) => args.run(),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
