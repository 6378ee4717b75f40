//! Team, flag and power values carried by player events

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LogError;

/// Team a player belongs to
///
/// The log encodes teams as 1 and 2 and swaps them with `3 - code`, so the
/// discriminants are part of the format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Team {
    #[default]
    None = 0,
    Red = 1,
    Blue = 2,
}

impl Team {
    /// Raw team code as stored in the log
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Whether the player is on a team
    pub fn is_set(self) -> bool {
        self != Team::None
    }

    /// Map a decoded code onto a team; only 1 and 2 are teams
    pub(crate) fn from_code(code: u8) -> Self {
        match code {
            1 => Team::Red,
            2 => Team::Blue,
            _ => Team::None,
        }
    }
}

impl TryFrom<u8> for Team {
    type Error = LogError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Team::None),
            1 => Ok(Team::Red),
            2 => Ok(Team::Blue),
            other => Err(LogError::InvalidTeam(other)),
        }
    }
}

impl FromStr for Team {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "0" => Ok(Team::None),
            "red" | "1" => Ok(Team::Red),
            "blue" | "2" => Ok(Team::Blue),
            _ => Err(LogError::UnknownTeam(s.to_string())),
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::None => write!(f, "none"),
            Team::Red => write!(f, "red"),
            Team::Blue => write!(f, "blue"),
        }
    }
}

/// Flag a player is carrying
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Flag {
    #[default]
    None = 0,
    Opponent = 1,
    OpponentPotato = 2,
    Neutral = 3,
    NeutralPotato = 4,
    /// Placeholder for a flag grabbed and lost within the same record
    Temporary = 5,
}

impl Flag {
    /// Whether a flag is held
    pub fn is_held(self) -> bool {
        self != Flag::None
    }

    /// Flag kind from the 2-bit grab selector (`1 + selector`)
    pub(crate) fn from_selector(selector: u32) -> Self {
        match selector {
            0 => Flag::Opponent,
            1 => Flag::OpponentPotato,
            2 => Flag::Neutral,
            _ => Flag::NeutralPotato,
        }
    }
}

bitflags::bitflags! {
    /// Power-ups currently held
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Powers: u8 {
        const JUKE_JUICE = 0b0001;
        const ROLLING_BOMB = 0b0010;
        const TAG_PRO = 0b0100;
        const TOP_SPEED = 0b1000;
    }
}

impl Powers {
    /// Single-power values in the order the log visits them
    pub const ORDER: [Powers; 4] = [
        Powers::JUKE_JUICE,
        Powers::ROLLING_BOMB,
        Powers::TAG_PRO,
        Powers::TOP_SPEED,
    ];
}

// Serialized as the raw bit set, matching the log encoding
impl Serialize for Powers {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}
