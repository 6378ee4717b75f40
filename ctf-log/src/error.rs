//! Errors raised while setting up a decoder
//!
//! Decoding itself never fails; these only cover parameters supplied by the
//! caller alongside the log bytes.

/// Rejected decoder parameters
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogError {
    #[error("Invalid map width: {0} (must be at least 1)")]
    InvalidWidth(u32),

    #[error("Invalid splat {axis} dimension: {size} (must be 1..={max})", max = crate::MAX_SPLAT_DIMENSION)]
    InvalidSplatDimension { axis: &'static str, size: u32 },

    #[error("Invalid team code: {0} (expected 0, 1 or 2)")]
    InvalidTeam(u8),

    #[error("Unknown team: {0:?} (expected none, red or blue)")]
    UnknownTeam(String),
}
