//! Per-player match statistics built from player events

use serde::Serialize;

use super::events::{PlayerEvents, Zone};
use super::types::{Flag, Powers, Team};
use crate::Tick;

/// Ticks spent inside each toggle zone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ZoneStats {
    pub prevent: Tick,
    pub button: Tick,
    pub block: Tick,
}

impl ZoneStats {
    fn add(&mut self, zone: Zone, ticks: Tick) {
        let slot = match zone {
            Zone::Prevent => &mut self.prevent,
            Zone::Button => &mut self.button,
            Zone::Block => &mut self.block,
        };
        *slot += ticks;
    }
}

/// Event sink aggregating one player's match
///
/// Open intervals (flag held, zone occupied, time on a team) are closed by
/// the event that ends them, by `quit`, and finally by `end`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlayerStats {
    /// Team at the end of the log
    pub team: Team,
    pub grabs: u32,
    pub captures: u32,
    pub flagless_captures: u32,
    pub drops: u32,
    pub pops: u32,
    pub returns: u32,
    pub tags: u32,
    pub power_ups: u32,
    pub duplicate_power_ups: u32,
    /// Ticks spent on a team
    pub time_played: Tick,
    /// Ticks spent carrying a flag
    pub hold: Tick,
    pub zones: ZoneStats,

    #[serde(skip)]
    joined_at: Option<Tick>,
    #[serde(skip)]
    held_since: Option<Tick>,
    #[serde(skip)]
    zone_since: [Option<Tick>; 3],
}

impl PlayerStats {
    /// Stats for a player who starts the log on `team`
    pub fn new(team: Team) -> Self {
        Self {
            team,
            joined_at: team.is_set().then_some(0),
            ..Self::default()
        }
    }

    fn close_hold(&mut self, time: Tick) {
        if let Some(since) = self.held_since.take() {
            self.hold += time.saturating_sub(since);
        }
    }

    fn close_zones(&mut self, time: Tick) {
        for (index, zone) in Zone::ORDER.into_iter().enumerate() {
            self.close_zone(zone, index, time);
        }
    }

    fn close_zone(&mut self, zone: Zone, index: usize, time: Tick) {
        if let Some(since) = self.zone_since[index].take() {
            self.zones.add(zone, time.saturating_sub(since));
        }
    }

    fn close_played(&mut self, time: Tick) {
        if let Some(since) = self.joined_at.take() {
            self.time_played += time.saturating_sub(since);
        }
    }
}

impl PlayerEvents for PlayerStats {
    fn join(&mut self, time: Tick, team: Team) {
        self.team = team;
        self.joined_at = Some(time);
    }

    fn quit(&mut self, time: Tick, _flag: Flag, _powers: Powers, _team: Team) {
        self.close_hold(time);
        self.close_zones(time);
        self.close_played(time);
        self.team = Team::None;
    }

    fn switch(&mut self, time: Tick, _flag: Flag, _powers: Powers, team: Team) {
        self.close_hold(time);
        self.team = team;
    }

    fn grab(&mut self, time: Tick, _flag: Flag, _powers: Powers, _team: Team) {
        self.grabs += 1;
        self.held_since = Some(time);
    }

    fn capture(&mut self, time: Tick, _flag: Flag, _powers: Powers, _team: Team) {
        self.captures += 1;
        self.close_hold(time);
    }

    fn flagless_capture(&mut self, _time: Tick, _flag: Flag, _powers: Powers, _team: Team) {
        self.flagless_captures += 1;
    }

    fn power_up(&mut self, _time: Tick, _flag: Flag, _power: Powers, _powers: Powers, _team: Team) {
        self.power_ups += 1;
    }

    fn duplicate_power_up(&mut self, _time: Tick, _flag: Flag, _powers: Powers, _team: Team) {
        self.duplicate_power_ups += 1;
    }

    fn flag_return(&mut self, _time: Tick, _flag: Flag, _powers: Powers, _team: Team) {
        self.returns += 1;
    }

    fn tag(&mut self, _time: Tick, _flag: Flag, _powers: Powers, _team: Team) {
        self.tags += 1;
    }

    fn drop_flag(&mut self, time: Tick, _flag: Flag, _powers: Powers, _team: Team) {
        self.drops += 1;
        self.close_hold(time);
    }

    fn pop(&mut self, _time: Tick, _powers: Powers, _team: Team) {
        self.pops += 1;
    }

    fn start_prevent(&mut self, time: Tick, _flag: Flag, _powers: Powers, _team: Team) {
        self.zone_since[0] = Some(time);
    }

    fn stop_prevent(&mut self, time: Tick, _flag: Flag, _powers: Powers, _team: Team) {
        self.close_zone(Zone::Prevent, 0, time);
    }

    fn start_button(&mut self, time: Tick, _flag: Flag, _powers: Powers, _team: Team) {
        self.zone_since[1] = Some(time);
    }

    fn stop_button(&mut self, time: Tick, _flag: Flag, _powers: Powers, _team: Team) {
        self.close_zone(Zone::Button, 1, time);
    }

    fn start_block(&mut self, time: Tick, _flag: Flag, _powers: Powers, _team: Team) {
        self.zone_since[2] = Some(time);
    }

    fn stop_block(&mut self, time: Tick, _flag: Flag, _powers: Powers, _team: Team) {
        self.close_zone(Zone::Block, 2, time);
    }

    fn end(&mut self, time: Tick, _flag: Flag, _powers: Powers, team: Team) {
        self.close_hold(time);
        self.close_zones(time);
        self.close_played(time);
        self.team = team;
    }
}
