//! Player command - decode one player's event log

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use ctf_log::{PlayerEvent, PlayerLogDecoder, PlayerStats, Team};

use crate::output::{Output, read_log};

/// Arguments for the player command
#[derive(Args)]
pub struct PlayerArgs {
    /// Player log file
    pub file: PathBuf,

    /// Team the player starts on (none, red, blue)
    #[arg(short, long, default_value = "none")]
    pub team: Team,

    /// Match duration in ticks, reported by the final end event
    #[arg(short, long)]
    pub duration: u64,

    /// Print aggregated stats instead of the event list
    #[arg(long)]
    pub stats: bool,
}

/// Execute the player command
pub fn execute(args: PlayerArgs, output: &Output) -> Result<()> {
    let data = read_log(&args.file)?;
    let decoder = PlayerLogDecoder::new(&data, args.team, args.duration);

    if args.stats {
        let mut stats = PlayerStats::new(args.team);
        decoder.decode(&mut stats);
        output.write(&stats)
    } else {
        let mut events: Vec<PlayerEvent> = Vec::new();
        decoder.decode(&mut events);
        tracing::info!("Decoded {} player events", events.len());
        output.write(&events)
    }
}
