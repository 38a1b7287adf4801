//! Read-only frame view for the renderer and HUD

use glam::Vec2;
use serde::Serialize;

use super::state::{MatchState, RoundPhase, Team};

/// One stone as the renderer sees it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoneView {
    pub id: u32,
    pub pos: Vec2,
    pub color: [u8; 3],
    pub team: Team,
}

/// Everything the front end needs to draw a frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub phase: &'static str,
    /// Stones in placement order
    pub stones: Vec<StoneView>,
    pub round_over: bool,
    /// Empty unless the round is over
    pub winner_text: &'static str,
    /// Stones on the sheet per team (Green, Yellow)
    pub placed: [usize; 2],
    /// Round wins per team (Green, Yellow)
    pub wins: [u32; 2],
}

impl FrameSnapshot {
    pub fn capture(state: &MatchState) -> Self {
        let round_over = matches!(state.phase, RoundPhase::Resolved { .. });
        Self {
            tick: state.time_ticks,
            phase: state.phase.as_str(),
            stones: state
                .stones
                .iter()
                .map(|s| StoneView {
                    id: s.id,
                    pos: s.pos,
                    color: s.team().color(),
                    team: s.team(),
                })
                .collect(),
            round_over,
            winner_text: state
                .outcome
                .filter(|_| round_over)
                .map(|o| o.text())
                .unwrap_or(""),
            placed: [
                state.placed_count(Team::Green),
                state.placed_count(Team::Yellow),
            ],
            wins: [
                state.scoreboard.wins(Team::Green),
                state.scoreboard.wins(Team::Yellow),
            ],
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
