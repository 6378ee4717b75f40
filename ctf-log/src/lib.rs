//! CTF-Log: bit-level decoders for capture-the-flag replay logs
//!
//! A recorded match is stored as several compact, bit-packed streams. None of
//! them are self-describing: every decoder reproduces the encoder's bit
//! consumption order exactly, and any deviation silently desynchronizes the
//! rest of the stream.
//!
//! # Streams
//!
//! - **Player log**: one per player. Per-tick delta records describing team
//!   changes, flag possession, power-ups and toggle zones. Decoded by
//!   [`PlayerLogDecoder`] into [`PlayerEvents`] hooks.
//! - **Map log**: run-length-encoded, row-major tile grid. Decoded by
//!   [`MapLogDecoder`] into [`MapEvents`] hooks.
//! - **Splat log**: per-tick paint splat coordinates. Decoded by
//!   [`SplatLogDecoder`] into [`SplatEvents`] hooks.
//!
//! All three share the [`BitCursor`] primitive and nothing else.
//!
//! # Truncation
//!
//! Decoding never fails. Reads past the end of a buffer yield zero bits, which
//! the encoder guarantees cannot corrupt alignment. The only errors in this
//! crate come from constructors rejecting parameters the caller supplied
//! (zero map width, splat dimensions out of range, unknown team codes).
//!
//! # Usage
//!
//! ```
//! use ctf_log::{PlayerEvent, PlayerLogDecoder, Team};
//!
//! let mut events: Vec<PlayerEvent> = Vec::new();
//! PlayerLogDecoder::new(&[0x00, 0x00], Team::None, 5).decode(&mut events);
//!
//! assert_eq!(events.len(), 1);
//! assert!(matches!(events[0], PlayerEvent::End { time: 5, .. }));
//! ```

mod cursor;
mod error;
mod map;
mod player;
mod splat;

#[cfg(test)]
mod test_utils;

pub use cursor::BitCursor;
pub use error::LogError;
pub use map::{MapEvent, MapEvents, MapLogDecoder, TileGrid, remap_tile};
pub use player::{
    Flag, PlayerEvent, PlayerEvents, PlayerLogDecoder, PlayerStats, Powers, Team, Zone, ZoneStats,
};
pub use splat::{
    MAX_SPLAT_DIMENSION, SplatAxis, SplatBatch, SplatEvents, SplatGrid, SplatLogDecoder,
};

/// Time in ticks since the start of the match
pub type Tick = u64;
