//! Player log decoding
//!
//! # Record layout
//!
//! ```text
//! team change   1 bit, then 1 bit (quit/switch when on a team, red/blue otherwise)
//! drop or pop   1 bit
//! returns       tally
//! tags          tally
//! grab          1 bit, only when no flag is held
//! captures      tally
//! keep          1 bit, only when the preceding conditions leave it open
//! flag kind     2 bits, only on a grab that keeps the flag
//! power-ups     tally
//! powers        1 bit per power: held ones may go down, others may come up
//! zones         3 bits: prevent, button, block toggles
//! time delta    1 + footer
//! ```

use tracing::{debug, trace};

use super::events::{PlayerEvents, Zone};
use super::types::{Flag, Powers, Team};
use crate::Tick;
use crate::cursor::BitCursor;

/// Decoder for a single player's event log
///
/// # Example
/// ```
/// use ctf_log::{PlayerEvent, PlayerLogDecoder, Team};
///
/// let mut events: Vec<PlayerEvent> = Vec::new();
/// PlayerLogDecoder::new(&[], Team::Red, 3600).decode(&mut events);
/// assert_eq!(events.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct PlayerLogDecoder<'a> {
    cursor: BitCursor<'a>,
    state: PlayerState,
    duration: Tick,
}

impl<'a> PlayerLogDecoder<'a> {
    /// Create a decoder for a player starting on `team`
    ///
    /// `duration` is the match length; it becomes the time of the final
    /// `end` event.
    pub fn new(data: &'a [u8], team: Team, duration: Tick) -> Self {
        Self {
            cursor: BitCursor::new(data),
            state: PlayerState {
                team,
                ..PlayerState::default()
            },
            duration,
        }
    }

    /// Decode every record, then emit `end`
    pub fn decode<E: PlayerEvents + ?Sized>(mut self, sink: &mut E) {
        let mut records = 0usize;

        while !self.cursor.is_at_end() {
            let record = Record::read(&mut self.cursor, &self.state);
            trace!(time = self.state.time, ?record, "player record");
            self.state.apply(&record, sink);
            records += 1;
        }

        let state = self.state;
        sink.end(self.duration, state.flag, state.powers, state.team);

        debug!(
            records,
            last_time = state.time,
            duration = self.duration,
            "decoded player log"
        );
    }
}

/// Running player state, mutated only by the decode loop
#[derive(Debug, Clone, Copy, Default)]
struct PlayerState {
    time: Tick,
    team: Team,
    flag: Flag,
    powers: Powers,
    zones: [bool; 3],
}

/// One delta record, read before any of its events are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Record {
    new_team: Team,
    drop_pop: bool,
    returns: u32,
    tags: u32,
    grab: bool,
    captures: u32,
    keep: bool,
    new_flag: Flag,
    powers_down: Powers,
    powers_up: Powers,
    /// Power-ups left over after every free slot was visited
    duplicates: u32,
    toggles: [bool; 3],
    delta: Tick,
}

impl Record {
    fn read(cursor: &mut BitCursor<'_>, state: &PlayerState) -> Self {
        let team = state.team;
        let flag = state.flag;

        let new_team = if cursor.read_bit() {
            if team.is_set() {
                if cursor.read_bit() {
                    Team::None
                } else {
                    Team::from_code(3 - team.code())
                }
            } else {
                Team::from_code(1 + u8::from(cursor.read_bit()))
            }
        } else {
            team
        };

        let drop_pop = cursor.read_bit();
        let returns = cursor.read_tally();
        let tags = cursor.read_tally();
        let grab = !flag.is_held() && cursor.read_bit();
        let captures = cursor.read_tally();

        // Each condition decides whether the next one reads a bit
        let keep = !drop_pop
            && new_team.is_set()
            && (new_team == team || !team.is_set())
            && (captures == 0 || (!flag.is_held() && !grab) || cursor.read_bit());

        let new_flag = if grab && keep {
            Flag::from_selector(cursor.read_fixed(2))
        } else if grab {
            Flag::Temporary
        } else {
            flag
        };

        let mut powerups = cursor.read_tally();
        let mut powers_down = Powers::empty();
        let mut powers_up = Powers::empty();
        for power in Powers::ORDER {
            if state.powers.contains(power) {
                if cursor.read_bit() {
                    powers_down |= power;
                }
            } else if powerups > 0 && cursor.read_bit() {
                powers_up |= power;
                powerups -= 1;
            }
        }

        let toggles = [cursor.read_bit(), cursor.read_bit(), cursor.read_bit()];
        let delta = 1 + Tick::from(cursor.read_footer());

        Self {
            new_team,
            drop_pop,
            returns,
            tags,
            grab,
            captures,
            keep,
            new_flag,
            powers_down,
            powers_up,
            duplicates: powerups,
            toggles,
            delta,
        }
    }
}

impl PlayerState {
    /// Advance time and emit the record's events in log order
    fn apply<E: PlayerEvents + ?Sized>(&mut self, record: &Record, sink: &mut E) {
        self.time = self.time.saturating_add(record.delta);
        let time = self.time;

        if !self.team.is_set() && record.new_team.is_set() {
            self.team = record.new_team;
            sink.join(time, self.team);
        }

        for _ in 0..record.returns {
            sink.flag_return(time, self.flag, self.powers, self.team);
        }

        for _ in 0..record.tags {
            sink.tag(time, self.flag, self.powers, self.team);
        }

        if record.grab {
            self.flag = record.new_flag;
            sink.grab(time, self.flag, self.powers, self.team);
        }

        let mut keep = record.keep;
        for _ in 0..record.captures {
            if keep || !self.flag.is_held() {
                sink.flagless_capture(time, self.flag, self.powers, self.team);
            } else {
                sink.capture(time, self.flag, self.powers, self.team);
                self.flag = Flag::None;
                keep = true;
            }
        }

        for power in Powers::ORDER {
            if record.powers_down.contains(power) {
                self.powers.remove(power);
                sink.power_down(time, self.flag, power, self.powers, self.team);
            } else if record.powers_up.contains(power) {
                self.powers.insert(power);
                sink.power_up(time, self.flag, power, self.powers, self.team);
            }
        }

        for _ in 0..record.duplicates {
            sink.duplicate_power_up(time, self.flag, self.powers, self.team);
        }

        for (index, zone) in Zone::ORDER.into_iter().enumerate() {
            if record.toggles[index] {
                self.toggle_zone(zone, index, time, sink);
            }
        }

        if record.drop_pop {
            if self.flag.is_held() {
                sink.drop_flag(time, self.flag, self.powers, self.team);
                self.flag = Flag::None;
            } else {
                sink.pop(time, self.powers, self.team);
            }
        }

        if record.new_team != self.team {
            if record.new_team.is_set() {
                sink.switch(time, self.flag, self.powers, record.new_team);
            } else {
                sink.quit(time, self.flag, self.powers, self.team);
                self.powers = Powers::empty();
            }
            self.flag = Flag::None;
            self.team = record.new_team;
        }
    }

    fn toggle_zone<E: PlayerEvents + ?Sized>(
        &mut self,
        zone: Zone,
        index: usize,
        time: Tick,
        sink: &mut E,
    ) {
        let (flag, powers, team) = (self.flag, self.powers, self.team);
        let active = self.zones[index];
        match (zone, active) {
            (Zone::Prevent, false) => sink.start_prevent(time, flag, powers, team),
            (Zone::Prevent, true) => sink.stop_prevent(time, flag, powers, team),
            (Zone::Button, false) => sink.start_button(time, flag, powers, team),
            (Zone::Button, true) => sink.stop_button(time, flag, powers, team),
            (Zone::Block, false) => sink.start_block(time, flag, powers, team),
            (Zone::Block, true) => sink.stop_block(time, flag, powers, team),
        }
        self.zones[index] = !active;
    }
}
