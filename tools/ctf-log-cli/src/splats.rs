//! Splats command - decode a splat log

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use ctf_log::{SplatBatch, SplatGrid, SplatLogDecoder};

use crate::output::{Output, read_log};

/// Arguments for the splats command
#[derive(Args)]
pub struct SplatArgs {
    /// Splat log file
    pub file: PathBuf,

    /// Map width in tiles
    #[arg(short, long)]
    pub width: u32,

    /// Map height in tiles
    #[arg(long)]
    pub height: u32,
}

/// Execute the splats command
pub fn execute(args: SplatArgs, output: &Output) -> Result<()> {
    let data = read_log(&args.file)?;
    let grid = SplatGrid::new(args.width, args.height)?;

    let mut batches: Vec<SplatBatch> = Vec::new();
    let ticks = SplatLogDecoder::new(&data, grid).decode(&mut batches);
    tracing::info!(
        "Decoded {} splat batches over {} ticks",
        batches.len(),
        ticks
    );

    output.write(&batches)
}
