//! Round win tallies
//!
//! Lives for the whole match in memory; survives round restarts and resets,
//! never written to disk.

use serde::{Deserialize, Serialize};

use crate::sim::{RoundOutcome, Team};

/// Cumulative round wins per team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Wins indexed by `Team::index()`
    wins: [u32; 2],
    /// Rounds that ended in a tie
    pub draws: u32,
}

impl Scoreboard {
    /// Create an empty scoreboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit a finished round. Draws increment neither team's tally.
    pub fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::Winner(team) => self.wins[team.index()] += 1,
            RoundOutcome::Draw => self.draws += 1,
        }
    }

    /// Rounds won by a team
    pub fn wins(&self, team: Team) -> u32 {
        self.wins[team.index()]
    }

    /// Total rounds recorded
    pub fn rounds_played(&self) -> u32 {
        self.wins[0] + self.wins[1] + self.draws
    }

    /// Team with more round wins, if any
    pub fn leader(&self) -> Option<Team> {
        match self.wins[0].cmp(&self.wins[1]) {
            std::cmp::Ordering::Greater => Some(Team::Green),
            std::cmp::Ordering::Less => Some(Team::Yellow),
            std::cmp::Ordering::Equal => None,
        }
    }
}
