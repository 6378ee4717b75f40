//! ctflog - Decode capture-the-flag replay logs
//!
//! # Commands
//!
//! - `ctflog player` - Decode one player's event log
//! - `ctflog map` - Decode a tile map log
//! - `ctflog splats` - Decode a splat log
//! - `ctflog match` - Decode every log listed in a match manifest
//!
//! All commands print JSON. Set `RUST_LOG=debug` for decoder summaries on
//! stderr.
//!
//! # Usage
//!
//! ```bash
//! ctflog player player0.bin --team red --duration 21600
//! ctflog player player0.bin --team red --duration 21600 --stats
//! ctflog map map.bin --width 40 --grid
//! ctflog splats splats.bin --width 40 --height 40
//! ctflog --pretty match match.toml
//! ```

mod manifest;
mod map;
mod output;
mod player;
mod report;
mod splats;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use output::Output;

/// ctflog - Decode capture-the-flag replay logs
#[derive(Parser)]
#[command(name = "ctflog")]
#[command(about = "Decode capture-the-flag replay logs into JSON")]
#[command(version)]
struct Cli {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a player event log
    Player(player::PlayerArgs),

    /// Decode a tile map log
    Map(map::MapArgs),

    /// Decode a splat log
    Splats(splats::SplatArgs),

    /// Decode every log listed in a match manifest
    Match(report::MatchArgs),
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let output = Output::new(cli.output, cli.pretty);

    match cli.command {
        Commands::Player(args) => player::execute(args, &output),
        Commands::Map(args) => map::execute(args, &output),
        Commands::Splats(args) => splats::execute(args, &output),
        Commands::Match(args) => report::execute(args, &output),
    }
}
