//! Splat log
//!
//! One record per tick, with no time coding of its own:
//!
//! ```text
//! count   tally
//! splats  count × (x: fixed(x_bits), y: fixed(y_bits))
//! ```
//!
//! Coordinates are stored in a zero-based domain wide enough for the map
//! scaled by 40 units per tile, shifted so the map sits centered with a
//! 20-unit margin. Subtracting the axis offset yields signed map coordinates.

use serde::Serialize;
use tracing::{debug, trace};

use crate::Tick;
use crate::cursor::BitCursor;
use crate::error::LogError;

/// Largest map dimension whose scaled domain still fits in 31 bits
pub const MAX_SPLAT_DIMENSION: u32 = 53_687_091;

/// Units per tile in splat coordinates
const TILE_SCALE: u64 = 40;

/// Fixed margin added to the centering offset
const MARGIN: i64 = 20;

/// Bit width and offset for one coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SplatAxis {
    bits: u32,
    offset: i32,
}

impl SplatAxis {
    /// Derive the axis coding for a map dimension of `size` tiles
    ///
    /// `size` must be within `1..=MAX_SPLAT_DIMENSION`; callers that take
    /// dimensions from untrusted input should go through [`SplatGrid::new`].
    pub fn new(size: u32) -> Self {
        debug_assert!(
            (1..=MAX_SPLAT_DIMENSION).contains(&size),
            "splat dimension out of range: {size}"
        );
        let scaled = u64::from(size) * TILE_SCALE;
        let domain = scaled.saturating_sub(1);
        let bits = u64::BITS - domain.leading_zeros();
        let offset = (((1i64 << bits) - scaled as i64) >> 1) + MARGIN;
        Self {
            bits,
            offset: offset as i32,
        }
    }

    /// Bits per stored coordinate
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Value subtracted from each stored coordinate
    pub fn offset(&self) -> i32 {
        self.offset
    }

    fn read(&self, cursor: &mut BitCursor<'_>) -> i32 {
        cursor.read_fixed(self.bits) as i32 - self.offset
    }
}

/// Coordinate coding for both axes of a map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SplatGrid {
    pub x: SplatAxis,
    pub y: SplatAxis,
}

impl SplatGrid {
    /// Validate map dimensions and derive both axes
    ///
    /// # Errors
    /// `LogError::InvalidSplatDimension` when either dimension is zero or
    /// above [`MAX_SPLAT_DIMENSION`].
    pub fn new(width: u32, height: u32) -> Result<Self, LogError> {
        Ok(Self {
            x: SplatAxis::new(check_dimension("width", width)?),
            y: SplatAxis::new(check_dimension("height", height)?),
        })
    }
}

fn check_dimension(axis: &'static str, size: u32) -> Result<u32, LogError> {
    if (1..=MAX_SPLAT_DIMENSION).contains(&size) {
        Ok(size)
    } else {
        Err(LogError::InvalidSplatDimension { axis, size })
    }
}

/// Hooks invoked by [`SplatLogDecoder`]
#[allow(unused_variables)]
pub trait SplatEvents {
    /// Splats recorded during `tick`; never empty
    fn splats(&mut self, tick: Tick, splats: &[(i32, i32)]) {}
}

/// Splats recorded during one tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplatBatch {
    pub tick: Tick,
    pub splats: Vec<(i32, i32)>,
}

impl SplatEvents for Vec<SplatBatch> {
    fn splats(&mut self, tick: Tick, splats: &[(i32, i32)]) {
        self.push(SplatBatch {
            tick,
            splats: splats.to_vec(),
        });
    }
}

/// Decoder for the splat log
#[derive(Debug, Clone)]
pub struct SplatLogDecoder<'a> {
    cursor: BitCursor<'a>,
    grid: SplatGrid,
}

impl<'a> SplatLogDecoder<'a> {
    pub fn new(data: &'a [u8], grid: SplatGrid) -> Self {
        Self {
            cursor: BitCursor::new(data),
            grid,
        }
    }

    /// Decode every tick, returning the number of ticks read
    pub fn decode<E: SplatEvents + ?Sized>(mut self, sink: &mut E) -> Tick {
        let mut tick: Tick = 0;
        let mut total = 0usize;
        let mut batch = Vec::new();

        while !self.cursor.is_at_end() {
            let count = self.cursor.read_tally();
            if count > 0 {
                batch.clear();
                for _ in 0..count {
                    let x = self.grid.x.read(&mut self.cursor);
                    let y = self.grid.y.read(&mut self.cursor);
                    batch.push((x, y));
                }
                trace!(tick, count, "splat batch");
                total += batch.len();
                sink.splats(tick, &batch);
            }
            tick += 1;
        }

        debug!(ticks = tick, splats = total, "decoded splat log");
        tick
    }
}

#[cfg(test)]
mod tests;
