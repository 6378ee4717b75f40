//! Match manifest parsing
//!
//! A match manifest lists the logs recorded for one match along with the
//! parameters each decoder needs. Paths are relative to the manifest.
//!
//! ```toml
//! [match]
//! name = "Semifinal"
//! duration = 21600
//!
//! [map]
//! width = 40
//! height = 40
//! tiles = "map.bin"
//! splats = "splats.bin"
//!
//! [[players]]
//! name = "Some Ball"
//! team = "red"
//! events = "player0.bin"
//! ```

use anyhow::{Context, Result};
use ctf_log::Team;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Match manifest structure
#[derive(Debug, Deserialize)]
pub struct MatchManifest {
    #[serde(rename = "match")]
    pub info: MatchSection,
    pub map: MapSection,
    #[serde(default)]
    pub players: Vec<PlayerEntry>,
}

/// Match metadata section
#[derive(Debug, Deserialize)]
pub struct MatchSection {
    pub name: Option<String>,

    /// Match length in ticks
    pub duration: u64,
}

/// Map section
#[derive(Debug, Deserialize)]
pub struct MapSection {
    /// Width in tiles
    pub width: u32,

    /// Height in tiles, used for splat coordinates
    pub height: u32,

    /// Tile map log
    pub tiles: Option<PathBuf>,

    /// Splat log
    pub splats: Option<PathBuf>,
}

/// Single player entry
#[derive(Debug, Deserialize)]
pub struct PlayerEntry {
    #[serde(default)]
    pub name: String,

    /// Team at the start of the log
    #[serde(default)]
    pub team: Team,

    /// Player event log
    pub events: PathBuf,
}

impl MatchManifest {
    /// Load manifest from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid manifest: {}", path.display()))
    }

    /// Parse manifest from string
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse match manifest")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_minimal() {
        let manifest = MatchManifest::parse(
            r#"
[match]
duration = 3600

[map]
width = 20
height = 18
"#,
        )
        .unwrap();

        assert_eq!(manifest.info.duration, 3600);
        assert!(manifest.info.name.is_none());
        assert_eq!(manifest.map.width, 20);
        assert_eq!(manifest.map.height, 18);
        assert!(manifest.map.tiles.is_none());
        assert!(manifest.players.is_empty());
    }

    #[test]
    fn test_manifest_with_players() {
        let manifest = MatchManifest::parse(
            r#"
[match]
name = "Final"
duration = 21600

[map]
width = 40
height = 40
tiles = "map.bin"
splats = "splats.bin"

[[players]]
name = "Ball"
team = "blue"
events = "p0.bin"

[[players]]
events = "p1.bin"
"#,
        )
        .unwrap();

        assert_eq!(manifest.info.name.as_deref(), Some("Final"));
        assert_eq!(manifest.map.tiles, Some(PathBuf::from("map.bin")));
        assert_eq!(manifest.players.len(), 2);
        assert_eq!(manifest.players[0].team, Team::Blue);
        assert_eq!(manifest.players[1].team, Team::None);
        assert_eq!(manifest.players[1].name, "");
    }

    #[test]
    fn test_manifest_rejects_unknown_team() {
        let result = MatchManifest::parse(
            r#"
[match]
duration = 1

[map]
width = 1
height = 1

[[players]]
team = "green"
events = "p.bin"
"#,
        );
        assert!(result.is_err());
    }
}
