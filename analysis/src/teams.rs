use std::collections::BTreeMap;

use crate::logline::LogLine;
use crate::player::{MalformedPlayerStringError, Player};
use crate::rounds::Round;

/// Players keyed by steamid.
pub type Roster = BTreeMap<String, Player>;

/// The side that won a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Side {
    CT,
    T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Team {
    Terrorist,
    CounterTerrorist,
    Spectator,
}

/// What a tracked event means for the rosters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Win(Side),
    Joined(Team),
    Disconnected,
    Other,
}

impl EventKind {
    /// The first matching pattern wins, in the order listed here.
    pub fn classify(event: &str) -> Self {
        if event.contains("CTs_Win") {
            Self::Win(Side::CT)
        } else if event.contains("Terrorists_Win") {
            Self::Win(Side::T)
        } else if event.contains("joined team \"TERRORIST\"") {
            Self::Joined(Team::Terrorist)
        } else if event.contains("joined team \"CT\"") {
            Self::Joined(Team::CounterTerrorist)
        } else if event.contains("joined team \"SPECTATOR\"") {
            Self::Joined(Team::Spectator)
        } else if event.contains("disconnected") {
            Self::Disconnected
        } else {
            Self::Other
        }
    }
}

/// The outcome of one round together with the rosters as they stood when it closed.
///
/// The rosters are copies, later rounds do not change them.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoundResult {
    pub winner: Option<Side>,
    pub te: Roster,
    pub ct: Roster,
    pub sp: Roster,
    pub raw_round: Vec<LogLine>,
}

impl RoundResult {
    pub fn roster(&self, team: Team) -> &Roster {
        match team {
            Team::Terrorist => &self.te,
            Team::CounterTerrorist => &self.ct,
            Team::Spectator => &self.sp,
        }
    }

    pub fn team_of(&self, steamid: &str) -> Option<Team> {
        team_of(&self.te, &self.ct, &self.sp, steamid)
    }
}

/// Keeps track of which player is on which team across the rounds of one log.
///
/// Rounds have to be fed in log order, a later join always overrides an earlier one.
#[derive(Debug, Default)]
pub struct TeamTracker {
    te: Roster,
    ct: Roster,
    sp: Roster,
}

impl TeamTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roster(&self, team: Team) -> &Roster {
        match team {
            Team::Terrorist => &self.te,
            Team::CounterTerrorist => &self.ct,
            Team::Spectator => &self.sp,
        }
    }

    fn roster_mut(&mut self, team: Team) -> &mut Roster {
        match team {
            Team::Terrorist => &mut self.te,
            Team::CounterTerrorist => &mut self.ct,
            Team::Spectator => &mut self.sp,
        }
    }

    pub fn team_of(&self, steamid: &str) -> Option<Team> {
        team_of(&self.te, &self.ct, &self.sp, steamid)
    }

    /// Applies the events of `round` to the rosters.
    ///
    /// A malformed player string aborts the round. Roster changes made by earlier
    /// events of the same round are kept.
    #[tracing::instrument(skip_all, fields(events = round.len()))]
    pub fn advance(&mut self, round: Round) -> Result<RoundResult, MalformedPlayerStringError> {
        let mut winner = None;

        for line in round.iter() {
            match EventKind::classify(&line.event) {
                EventKind::Win(side) => {
                    winner = Some(side);
                }
                EventKind::Joined(team) => {
                    let player = Player::parse(&line.event)?;
                    self.change_team(player, Some(team));
                }
                EventKind::Disconnected => {
                    let player = Player::parse(&line.event)?;
                    self.change_team(player, None);
                }
                EventKind::Other => {}
            };
        }

        tracing::debug!(
            ?winner,
            te = self.te.len(),
            ct = self.ct.len(),
            sp = self.sp.len(),
            "Round closed"
        );

        Ok(RoundResult {
            winner,
            te: self.te.clone(),
            ct: self.ct.clone(),
            sp: self.sp.clone(),
            raw_round: round.lines,
        })
    }

    fn change_team(&mut self, player: Player, team: Option<Team>) {
        for roster in [&mut self.te, &mut self.ct, &mut self.sp] {
            roster.remove(&player.steamid);
        }

        match team {
            Some(team) => {
                tracing::trace!(steamid = %player.steamid, ?team, "Player changed team");
                self.roster_mut(team).insert(player.steamid.clone(), player);
            }
            None => {
                tracing::trace!(steamid = %player.steamid, "Player left");
            }
        };
    }
}

fn team_of(te: &Roster, ct: &Roster, sp: &Roster, steamid: &str) -> Option<Team> {
    if te.contains_key(steamid) {
        Some(Team::Terrorist)
    } else if ct.contains_key(steamid) {
        Some(Team::CounterTerrorist)
    } else if sp.contains_key(steamid) {
        Some(Team::Spectator)
    } else {
        None
    }
}
