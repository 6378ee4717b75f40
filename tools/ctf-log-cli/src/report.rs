//! Match command - decode every log in a match manifest into one report

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};

use ctf_log::{
    MapLogDecoder, PlayerLogDecoder, PlayerStats, SplatBatch, SplatGrid, SplatLogDecoder, Team,
    TileGrid,
};

use crate::manifest::MatchManifest;
use crate::output::{Output, read_log};

/// Arguments for the match command
#[derive(Args)]
pub struct MatchArgs {
    /// Match manifest (TOML)
    pub manifest: PathBuf,
}

/// Decoded summary of one match
#[derive(Debug, Serialize)]
pub struct MatchReport {
    pub name: Option<String>,
    pub duration: u64,
    pub map: MapReport,
    pub players: Vec<PlayerReport>,
}

#[derive(Debug, Serialize)]
pub struct MapReport {
    pub width: u32,
    pub height: u32,
    /// Rows found in the tile log, if one was given
    pub decoded_height: Option<u32>,
    pub tiles: Option<TileGrid>,
    /// Total splats in the splat log, if one was given
    pub splats: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct PlayerReport {
    pub name: String,
    pub starting_team: Team,
    pub stats: PlayerStats,
}

/// Execute the match command
pub fn execute(args: MatchArgs, output: &Output) -> Result<()> {
    let manifest = MatchManifest::load(&args.manifest)?;
    let base = args.manifest.parent().unwrap_or_else(|| Path::new("."));

    let report = build_report(&manifest, base)?;
    tracing::info!(
        "Decoded match with {} players over {} ticks",
        report.players.len(),
        report.duration
    );

    output.write(&report)
}

/// Decode every log the manifest lists, resolving paths against `base`
pub fn build_report(manifest: &MatchManifest, base: &Path) -> Result<MatchReport> {
    let map = &manifest.map;

    let tiles = match &map.tiles {
        Some(path) => {
            let data = read_log(&base.join(path))?;
            let mut grid = TileGrid::new(map.width);
            MapLogDecoder::new(&data, map.width)?.decode(&mut grid);
            Some(grid)
        }
        None => None,
    };

    let splats = match &map.splats {
        Some(path) => {
            let data = read_log(&base.join(path))?;
            let grid = SplatGrid::new(map.width, map.height)?;
            let mut batches: Vec<SplatBatch> = Vec::new();
            SplatLogDecoder::new(&data, grid).decode(&mut batches);
            Some(batches.iter().map(|batch| batch.splats.len()).sum())
        }
        None => None,
    };

    let mut players = Vec::with_capacity(manifest.players.len());
    for (index, entry) in manifest.players.iter().enumerate() {
        let data = read_log(&base.join(&entry.events))
            .with_context(|| format!("Player {} ({})", index, entry.name))?;
        let mut stats = PlayerStats::new(entry.team);
        PlayerLogDecoder::new(&data, entry.team, manifest.info.duration).decode(&mut stats);
        players.push(PlayerReport {
            name: entry.name.clone(),
            starting_team: entry.team,
            stats,
        });
    }

    Ok(MatchReport {
        name: manifest.info.name.clone(),
        duration: manifest.info.duration,
        map: MapReport {
            width: map.width,
            height: map.height,
            decoded_height: tiles.as_ref().map(TileGrid::height),
            tiles,
            splats,
        },
        players,
    })
}
