//! Player event log
//!
//! - `types` - Team, flag and power values
//! - `events` - Hook trait and the recorded event enum
//! - `decoder` - Record reading and event emission
//! - `stats` - Aggregating sink

mod decoder;
mod events;
mod stats;
mod types;


pub use decoder::PlayerLogDecoder;
pub use events::{PlayerEvent, PlayerEvents, Zone};
pub use stats::{PlayerStats, ZoneStats};
pub use types::{Flag, Powers, Team};
