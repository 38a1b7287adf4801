//! Round completion and winner selection
//!
//! Only each team's single closest stone to the target matters.

use glam::Vec2;

use super::state::{RoundOutcome, Stone, Team};

/// True iff every stone of the round is placed and all of them are at rest.
///
/// Relies on `Stone::advance` snapping slow stones to an exact zero velocity.
pub fn is_round_complete(stones: &[Stone], stones_per_round: u32) -> bool {
    stones.len() >= stones_per_round as usize && stones.iter().all(Stone::is_at_rest)
}

/// Closest distance from any of a team's stones to `target` (`INFINITY` if none)
pub fn closest_distance(stones: &[Stone], team: Team, target: Vec2) -> f32 {
    stones
        .iter()
        .filter(|s| s.team() == team)
        .map(|s| s.pos.distance(target))
        .fold(f32::INFINITY, f32::min)
}

/// Team whose closest stone is nearer the target; equal distances are a draw
pub fn determine_winner(stones: &[Stone], target: Vec2) -> RoundOutcome {
    let green = closest_distance(stones, Team::Green, target);
    let yellow = closest_distance(stones, Team::Yellow, target);

    if green < yellow {
        RoundOutcome::Winner(Team::Green)
    } else if yellow < green {
        RoundOutcome::Winner(Team::Yellow)
    } else {
        RoundOutcome::Draw
    }
}
