//! Player event hooks and their recorded form

use serde::Serialize;

use super::types::{Flag, Powers, Team};
use crate::Tick;

/// Toggleable map zones a player can stand in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Prevent,
    Button,
    Block,
}

impl Zone {
    /// Zones in the order their toggle bits appear
    pub const ORDER: [Zone; 3] = [Zone::Prevent, Zone::Button, Zone::Block];
}

/// Hooks invoked by [`PlayerLogDecoder`](super::PlayerLogDecoder)
///
/// Every method defaults to a no-op, so sinks only implement what they need.
/// Hooks fire in the exact order the log defines; state passed along is the
/// state at the moment of the event.
#[allow(unused_variables)]
pub trait PlayerEvents {
    /// Player joined `team` after having none
    fn join(&mut self, time: Tick, team: Team) {}

    /// Player left the match; values are those held just before leaving
    fn quit(&mut self, time: Tick, flag: Flag, powers: Powers, team: Team) {}

    /// Player moved to `team`; `flag` is the flag held before switching
    fn switch(&mut self, time: Tick, flag: Flag, powers: Powers, team: Team) {}

    fn grab(&mut self, time: Tick, flag: Flag, powers: Powers, team: Team) {}

    /// Capture with `flag`, which is dropped afterwards
    fn capture(&mut self, time: Tick, flag: Flag, powers: Powers, team: Team) {}

    /// Capture that leaves possession unchanged
    fn flagless_capture(&mut self, time: Tick, flag: Flag, powers: Powers, team: Team) {}

    /// Picked up `power`; `powers` already includes it
    fn power_up(&mut self, time: Tick, flag: Flag, power: Powers, powers: Powers, team: Team) {}

    /// Picked up a power that was already held
    fn duplicate_power_up(&mut self, time: Tick, flag: Flag, powers: Powers, team: Team) {}

    /// Lost `power`; `powers` no longer includes it
    fn power_down(&mut self, time: Tick, flag: Flag, power: Powers, powers: Powers, team: Team) {}

    /// Returned a flag carried by an opponent
    fn flag_return(&mut self, time: Tick, flag: Flag, powers: Powers, team: Team) {}

    fn tag(&mut self, time: Tick, flag: Flag, powers: Powers, team: Team) {}

    /// Died while carrying `flag`
    fn drop_flag(&mut self, time: Tick, flag: Flag, powers: Powers, team: Team) {}

    /// Died without a flag
    fn pop(&mut self, time: Tick, powers: Powers, team: Team) {}

    fn start_prevent(&mut self, time: Tick, flag: Flag, powers: Powers, team: Team) {}
    fn stop_prevent(&mut self, time: Tick, flag: Flag, powers: Powers, team: Team) {}
    fn start_button(&mut self, time: Tick, flag: Flag, powers: Powers, team: Team) {}
    fn stop_button(&mut self, time: Tick, flag: Flag, powers: Powers, team: Team) {}
    fn start_block(&mut self, time: Tick, flag: Flag, powers: Powers, team: Team) {}
    fn stop_block(&mut self, time: Tick, flag: Flag, powers: Powers, team: Team) {}

    /// Stream finished; `time` is the match duration supplied by the caller
    fn end(&mut self, time: Tick, flag: Flag, powers: Powers, team: Team) {}
}

/// One player hook invocation as data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PlayerEvent {
    Join {
        time: Tick,
        team: Team,
    },
    Quit {
        time: Tick,
        flag: Flag,
        powers: Powers,
        team: Team,
    },
    Switch {
        time: Tick,
        flag: Flag,
        powers: Powers,
        team: Team,
    },
    Grab {
        time: Tick,
        flag: Flag,
        powers: Powers,
        team: Team,
    },
    Capture {
        time: Tick,
        flag: Flag,
        powers: Powers,
        team: Team,
    },
    FlaglessCapture {
        time: Tick,
        flag: Flag,
        powers: Powers,
        team: Team,
    },
    PowerUp {
        time: Tick,
        flag: Flag,
        power: Powers,
        powers: Powers,
        team: Team,
    },
    DuplicatePowerUp {
        time: Tick,
        flag: Flag,
        powers: Powers,
        team: Team,
    },
    PowerDown {
        time: Tick,
        flag: Flag,
        power: Powers,
        powers: Powers,
        team: Team,
    },
    Return {
        time: Tick,
        flag: Flag,
        powers: Powers,
        team: Team,
    },
    Tag {
        time: Tick,
        flag: Flag,
        powers: Powers,
        team: Team,
    },
    Drop {
        time: Tick,
        flag: Flag,
        powers: Powers,
        team: Team,
    },
    Pop {
        time: Tick,
        powers: Powers,
        team: Team,
    },
    StartZone {
        time: Tick,
        zone: Zone,
        flag: Flag,
        powers: Powers,
        team: Team,
    },
    StopZone {
        time: Tick,
        zone: Zone,
        flag: Flag,
        powers: Powers,
        team: Team,
    },
    End {
        time: Tick,
        flag: Flag,
        powers: Powers,
        team: Team,
    },
}

impl PlayerEvent {
    /// Time the event happened
    pub fn time(&self) -> Tick {
        match *self {
            PlayerEvent::Join { time, .. }
            | PlayerEvent::Quit { time, .. }
            | PlayerEvent::Switch { time, .. }
            | PlayerEvent::Grab { time, .. }
            | PlayerEvent::Capture { time, .. }
            | PlayerEvent::FlaglessCapture { time, .. }
            | PlayerEvent::PowerUp { time, .. }
            | PlayerEvent::DuplicatePowerUp { time, .. }
            | PlayerEvent::PowerDown { time, .. }
            | PlayerEvent::Return { time, .. }
            | PlayerEvent::Tag { time, .. }
            | PlayerEvent::Drop { time, .. }
            | PlayerEvent::Pop { time, .. }
            | PlayerEvent::StartZone { time, .. }
            | PlayerEvent::StopZone { time, .. }
            | PlayerEvent::End { time, .. } => time,
        }
    }
}

impl PlayerEvents for Vec<PlayerEvent> {
    fn join(&mut self, time: Tick, team: Team) {
        self.push(PlayerEvent::Join { time, team });
    }

    fn quit(&mut self, time: Tick, flag: Flag, powers: Powers, team: Team) {
        self.push(PlayerEvent::Quit {
            time,
            flag,
            powers,
            team,
        });
    }

    fn switch(&mut self, time: Tick, flag: Flag, powers: Powers, team: Team) {
        self.push(PlayerEvent::Switch {
            time,
            flag,
            powers,
            team,
        });
    }

    fn grab(&mut self, time: Tick, flag: Flag, powers: Powers, team: Team) {
        self.push(PlayerEvent::Grab {
            time,
            flag,
            powers,
            team,
        });
    }

    fn capture(&mut self, time: Tick, flag: Flag, powers: Powers, team: Team) {
        self.push(PlayerEvent::Capture {
            time,
            flag,
            powers,
            team,
        });
    }

    fn flagless_capture(&mut self, time: Tick, flag: Flag, powers: Powers, team: Team) {
        self.push(PlayerEvent::FlaglessCapture {
            time,
            flag,
            powers,
            team,
        });
    }

    fn power_up(&mut self, time: Tick, flag: Flag, power: Powers, powers: Powers, team: Team) {
        self.push(PlayerEvent::PowerUp {
            time,
            flag,
            power,
            powers,
            team,
        });
    }

    fn duplicate_power_up(&mut self, time: Tick, flag: Flag, powers: Powers, team: Team) {
        self.push(PlayerEvent::DuplicatePowerUp {
            time,
            flag,
            powers,
            team,
        });
    }

    fn power_down(&mut self, time: Tick, flag: Flag, power: Powers, powers: Powers, team: Team) {
        self.push(PlayerEvent::PowerDown {
            time,
            flag,
            power,
            powers,
            team,
        });
    }

    fn flag_return(&mut self, time: Tick, flag: Flag, powers: Powers, team: Team) {
        self.push(PlayerEvent::Return {
            time,
            flag,
            powers,
            team,
        });
    }

    fn tag(&mut self, time: Tick, flag: Flag, powers: Powers, team: Team) {
        self.push(PlayerEvent::Tag {
            time,
            flag,
            powers,
            team,
        });
    }

    fn drop_flag(&mut self, time: Tick, flag: Flag, powers: Powers, team: Team) {
        self.push(PlayerEvent::Drop {
            time,
            flag,
            powers,
            team,
        });
    }

    fn pop(&mut self, time: Tick, powers: Powers, team: Team) {
        self.push(PlayerEvent::Pop { time, powers, team });
    }

    fn start_prevent(&mut self, time: Tick, flag: Flag, powers: Powers, team: Team) {
        self.push(zone_event(true, time, Zone::Prevent, flag, powers, team));
    }

    fn stop_prevent(&mut self, time: Tick, flag: Flag, powers: Powers, team: Team) {
        self.push(zone_event(false, time, Zone::Prevent, flag, powers, team));
    }

    fn start_button(&mut self, time: Tick, flag: Flag, powers: Powers, team: Team) {
        self.push(zone_event(true, time, Zone::Button, flag, powers, team));
    }

    fn stop_button(&mut self, time: Tick, flag: Flag, powers: Powers, team: Team) {
        self.push(zone_event(false, time, Zone::Button, flag, powers, team));
    }

    fn start_block(&mut self, time: Tick, flag: Flag, powers: Powers, team: Team) {
        self.push(zone_event(true, time, Zone::Block, flag, powers, team));
    }

    fn stop_block(&mut self, time: Tick, flag: Flag, powers: Powers, team: Team) {
        self.push(zone_event(false, time, Zone::Block, flag, powers, team));
    }

    fn end(&mut self, time: Tick, flag: Flag, powers: Powers, team: Team) {
        self.push(PlayerEvent::End {
            time,
            flag,
            powers,
            team,
        });
    }
}

fn zone_event(
    start: bool,
    time: Tick,
    zone: Zone,
    flag: Flag,
    powers: Powers,
    team: Team,
) -> PlayerEvent {
    if start {
        PlayerEvent::StartZone {
            time,
            zone,
            flag,
            powers,
            team,
        }
    } else {
        PlayerEvent::StopZone {
            time,
            zone,
            flag,
            powers,
            team,
        }
    }
}
