//! Tile map log
//!
//! The map is stored row-major as runs of identical tiles:
//!
//! ```text
//! tile code   6 bits, remapped through `remap_tile`
//! run length  1 + footer
//! ```
//!
//! Runs may cross row boundaries. The stream is read until the cursor is at
//! its end *and* the current row is complete; a row still in progress is
//! finished from zero bits past the end of the buffer.

use serde::Serialize;
use tracing::{debug, trace};

use crate::cursor::BitCursor;
use crate::error::LogError;

/// Translate a raw 6-bit tile code into a tile id
///
/// Codes above 63 are masked to their low 6 bits.
pub fn remap_tile(raw: u8) -> u16 {
    let raw = u16::from(raw & 0x3F);
    match raw {
        0 => 0,
        1..=5 => raw + 9,
        6..=12 => (raw - 4) * 10,
        13..=16 => raw + 77,
        17..=19 => (raw - 7) * 10,
        20..=21 => raw + 110,
        22..=31 => (raw - 8) * 10,
        32..=33 => raw + 208,
        34..=35 => raw + 216,
        _ => (raw - 10) * 10,
    }
}

/// Hooks invoked by [`MapLogDecoder`]
#[allow(unused_variables)]
pub trait MapEvents {
    /// A new row begins; fired before its first tile
    fn row_start(&mut self, y: u32) {}

    fn tile(&mut self, x: u32, y: u32, tile: u16) {}
}

/// One map hook invocation as data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MapEvent {
    RowStart { y: u32 },
    Tile { x: u32, y: u32, tile: u16 },
}

impl MapEvents for Vec<MapEvent> {
    fn row_start(&mut self, y: u32) {
        self.push(MapEvent::RowStart { y });
    }

    fn tile(&mut self, x: u32, y: u32, tile: u16) {
        self.push(MapEvent::Tile { x, y, tile });
    }
}

/// Map sink rebuilding the tile rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileGrid {
    width: u32,
    rows: Vec<Vec<u16>>,
}

impl TileGrid {
    pub fn new(width: u32) -> Self {
        Self {
            width,
            rows: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows started so far
    pub fn height(&self) -> u32 {
        self.rows.len() as u32
    }

    /// Tile id at (x, y), if that cell was decoded
    pub fn get(&self, x: u32, y: u32) -> Option<u16> {
        self.rows.get(y as usize)?.get(x as usize).copied()
    }

    pub fn rows(&self) -> &[Vec<u16>] {
        &self.rows
    }
}

impl MapEvents for TileGrid {
    fn row_start(&mut self, _y: u32) {
        self.rows.push(Vec::with_capacity(self.width as usize));
    }

    fn tile(&mut self, _x: u32, _y: u32, tile: u16) {
        if let Some(row) = self.rows.last_mut() {
            row.push(tile);
        }
    }
}

/// Decoder for the tile map log
#[derive(Debug, Clone)]
pub struct MapLogDecoder<'a> {
    cursor: BitCursor<'a>,
    width: u32,
}

impl<'a> MapLogDecoder<'a> {
    /// Create a decoder for a map `width` tiles wide
    ///
    /// # Errors
    /// `LogError::InvalidWidth` when `width` is zero, since no row could
    /// ever be completed.
    pub fn new(data: &'a [u8], width: u32) -> Result<Self, LogError> {
        if width == 0 {
            return Err(LogError::InvalidWidth(width));
        }
        Ok(Self {
            cursor: BitCursor::new(data),
            width,
        })
    }

    /// Decode every run, returning the map height
    pub fn decode<E: MapEvents + ?Sized>(mut self, sink: &mut E) -> u32 {
        let mut x = 0u32;
        let mut y = 0u32;
        let mut runs = 0usize;

        while !self.cursor.is_at_end() || x != 0 {
            let tile = remap_tile(self.cursor.read_fixed(6) as u8);
            let run = 1 + u64::from(self.cursor.read_footer());
            trace!(tile, run, x, y, "map run");
            runs += 1;

            for _ in 0..run {
                if x == 0 {
                    sink.row_start(y);
                }
                sink.tile(x, y, tile);
                x += 1;
                if x == self.width {
                    x = 0;
                    y += 1;
                }
            }
        }

        debug!(runs, width = self.width, height = y, "decoded map log");
        y
    }
}
