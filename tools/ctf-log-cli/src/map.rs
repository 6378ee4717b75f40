//! Map command - decode a tile map log

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use ctf_log::{MapEvent, MapLogDecoder, TileGrid};

use crate::output::{Output, read_log};

/// Arguments for the map command
#[derive(Args)]
pub struct MapArgs {
    /// Map log file
    pub file: PathBuf,

    /// Map width in tiles
    #[arg(short, long)]
    pub width: u32,

    /// Print the rebuilt rows instead of the event list
    #[arg(long)]
    pub grid: bool,
}

/// Execute the map command
pub fn execute(args: MapArgs, output: &Output) -> Result<()> {
    let data = read_log(&args.file)?;
    let decoder = MapLogDecoder::new(&data, args.width)?;

    if args.grid {
        let mut grid = TileGrid::new(args.width);
        let height = decoder.decode(&mut grid);
        tracing::info!("Decoded {}x{} map", args.width, height);
        output.write(&grid)
    } else {
        let mut events: Vec<MapEvent> = Vec::new();
        let height = decoder.decode(&mut events);
        tracing::info!("Decoded {}x{} map", args.width, height);
        output.write(&events)
    }
}
