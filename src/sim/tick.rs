//! Fixed timestep simulation tick
//!
//! One tick: integrate every stone, resolve collisions pairwise, then
//! re-evaluate the round phase. Physics is in per-tick units, so the tick
//! itself takes no `dt`.

use super::collision::resolve_collisions;
use super::scoring::{determine_winner, is_round_complete};
use super::state::{GameEvent, MatchState, RoundPhase, Team};

/// Advance every stone by one tick (movement and friction only)
pub fn integrate(state: &mut MatchState) {
    for stone in &mut state.stones {
        stone.advance();
    }
}

/// Advance the match by one fixed timestep
pub fn tick(state: &mut MatchState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    // Resolved rounds freeze the sheet until the countdown runs out
    if let RoundPhase::Resolved { ticks_remaining } = state.phase {
        if ticks_remaining > 1 {
            state.phase = RoundPhase::Resolved {
                ticks_remaining: ticks_remaining - 1,
            };
        } else {
            log::info!("Starting next round");
            state.clear_round();
            events.push(GameEvent::RoundRestarted);
        }
        return events;
    }

    integrate(state);
    resolve_collisions(&mut state.stones);

    if state.all_stones_placed() {
        if is_round_complete(&state.stones, state.settings.stones_per_round()) {
            let outcome = determine_winner(&state.stones, state.settings.target());
            state.scoreboard.record(outcome);
            state.outcome = Some(outcome);
            state.gesture = None;
            state.phase = RoundPhase::Resolved {
                ticks_remaining: state.settings.resolve_delay_ticks(),
            };
            log::info!(
                "{} (Green {} - Yellow {})",
                outcome.text(),
                state.scoreboard.wins(Team::Green),
                state.scoreboard.wins(Team::Yellow)
            );
            events.push(GameEvent::RoundResolved(outcome));

            if state.settings.resolve_delay_ticks() == 0 {
                log::info!("Starting next round");
                state.clear_round();
                events.push(GameEvent::RoundRestarted);
            }
        } else {
            state.phase = RoundPhase::Settling;
        }
    }

    events
}
