//! Input events from the UI layer
//!
//! The front end turns clicks, pointer motion and button presses into
//! `InputEvent`s; `handle_input` applies them to the match. Inputs never
//! advance physics - that only happens in `tick`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameEvent, Gesture, MatchState, RoundPhase};
use crate::consts::LAUNCH_SCALE;

/// A discrete player action
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// "Set stone" button
    PlaceStone,
    /// Pointer pressed; selects the stone under it
    Press(Vec2),
    /// Pointer moved while pressed; the selected stone follows it
    Drag(Vec2),
    /// Pointer released; flings the selected stone
    Release(Vec2),
    /// "Restart" button
    Reset,
}

/// Launch velocity for a press-to-release drag
#[inline]
pub fn launch_velocity(press: Vec2, release: Vec2) -> Vec2 {
    (release - press) * LAUNCH_SCALE
}

/// Apply one input event to the match.
///
/// While a round is resolved only `Reset` is honored.
pub fn handle_input(state: &mut MatchState, event: InputEvent) -> Option<GameEvent> {
    if matches!(state.phase, RoundPhase::Resolved { .. }) && event != InputEvent::Reset {
        log::debug!("Ignoring {:?} while round is resolved", event);
        return None;
    }

    match event {
        InputEvent::PlaceStone => {
            state.gesture = None;
            match state.place_stone() {
                Some(stone) => {
                    log::debug!("Placed stone {} for {}", stone.id, stone.team().as_str());
                    Some(GameEvent::StonePlaced {
                        id: stone.id,
                        team: stone.team(),
                    })
                }
                None => {
                    log::debug!("Round is full, ignoring stone placement");
                    None
                }
            }
        }

        InputEvent::Press(point) => {
            state.gesture = state.stone_at(point).map(|stone| Gesture {
                stone_id: stone.id,
                press: point,
            });
            None
        }

        InputEvent::Drag(point) => {
            let gesture = state.gesture?;
            if let Some(stone) = state.stone_mut(gesture.stone_id) {
                stone.pos = point;
            }
            None
        }

        InputEvent::Release(point) => {
            let gesture = state.gesture.take()?;
            let stone = state.stone_mut(gesture.stone_id)?;
            stone.vel = launch_velocity(gesture.press, point);
            log::debug!("Launched stone {} at {:?}", stone.id, stone.vel);
            Some(GameEvent::StoneLaunched {
                id: stone.id,
                vel: stone.vel,
            })
        }

        InputEvent::Reset => {
            log::info!("Round reset by player");
            state.clear_round();
            Some(GameEvent::RoundRestarted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::Team;

    fn launch_pos(state: &MatchState) -> Vec2 {
        state.settings.launch_position()
    }

    #[test]
    fn test_place_stone_event() {
        let mut state = MatchState::new(Settings::default());
        let event = handle_input(&mut state, InputEvent::PlaceStone);
        assert!(matches!(
            event,
            Some(GameEvent::StonePlaced {
                team: Team::Green,
                ..
            })
        ));
        assert_eq!(state.stones.len(), 1);
    }

    #[test]
    fn test_place_stone_is_noop_when_full() {
        let settings = Settings {
            max_stones_per_team: 1,
            ..Default::default()
        };
        let mut state = MatchState::new(settings);
        for _ in 0..5 {
            handle_input(&mut state, InputEvent::PlaceStone);
        }
        assert_eq!(state.stones.len(), 2);
        assert_eq!(state.stone_counter, 2);
    }

    #[test]
    fn test_press_drag_release() {
        let mut state = MatchState::new(Settings::default());
        handle_input(&mut state, InputEvent::PlaceStone);
        let start = launch_pos(&state);

        handle_input(&mut state, InputEvent::Press(start + Vec2::new(3.0, 0.0)));
        assert!(state.gesture.is_some());

        handle_input(&mut state, InputEvent::Drag(Vec2::new(300.0, 200.0)));
        assert_eq!(state.stones[0].pos, Vec2::new(300.0, 200.0));
        assert_eq!(state.stones[0].vel, Vec2::ZERO);

        let event = handle_input(&mut state, InputEvent::Release(start + Vec2::new(103.0, -20.0)));
        assert!(matches!(event, Some(GameEvent::StoneLaunched { .. })));
        assert!((state.stones[0].vel - Vec2::new(10.0, -2.0)).length() < 1e-5);
        // Release does not move the stone
        assert_eq!(state.stones[0].pos, Vec2::new(300.0, 200.0));
        assert!(state.gesture.is_none());
    }

    #[test]
    fn test_press_on_empty_ice_selects_nothing() {
        let mut state = MatchState::new(Settings::default());
        handle_input(&mut state, InputEvent::PlaceStone);

        handle_input(&mut state, InputEvent::Press(Vec2::new(700.0, 50.0)));
        assert!(state.gesture.is_none());

        handle_input(&mut state, InputEvent::Drag(Vec2::new(10.0, 10.0)));
        assert_eq!(
            handle_input(&mut state, InputEvent::Release(Vec2::new(900.0, 50.0))),
            None
        );
        assert_eq!(state.stones[0].pos, launch_pos(&state));
        assert_eq!(state.stones[0].vel, Vec2::ZERO);
    }

    #[test]
    fn test_place_stone_cancels_gesture() {
        let mut state = MatchState::new(Settings::default());
        handle_input(&mut state, InputEvent::PlaceStone);
        let start = launch_pos(&state);
        handle_input(&mut state, InputEvent::Press(start));
        handle_input(&mut state, InputEvent::PlaceStone);
        assert!(state.gesture.is_none());
    }

    #[test]
    fn test_reset_clears_round_but_keeps_tallies() {
        let mut state = MatchState::new(Settings::default());
        state.scoreboard.record(crate::sim::RoundOutcome::Winner(Team::Green));
        handle_input(&mut state, InputEvent::PlaceStone);
        handle_input(&mut state, InputEvent::PlaceStone);

        let event = handle_input(&mut state, InputEvent::Reset);
        assert_eq!(event, Some(GameEvent::RoundRestarted));
        assert!(state.stones.is_empty());
        assert_eq!(state.stone_counter, 0);
        assert_eq!(state.phase, RoundPhase::Placing);
        assert_eq!(state.scoreboard.wins(Team::Green), 1);
    }

    #[test]
    fn test_resolved_round_ignores_input_except_reset() {
        let mut state = MatchState::new(Settings::default());
        handle_input(&mut state, InputEvent::PlaceStone);
        state.phase = RoundPhase::Resolved { ticks_remaining: 10 };

        assert_eq!(handle_input(&mut state, InputEvent::PlaceStone), None);
        let start = launch_pos(&state);
        handle_input(&mut state, InputEvent::Press(start));
        assert!(state.gesture.is_none());
        assert_eq!(state.stones.len(), 1);

        handle_input(&mut state, InputEvent::Reset);
        assert_eq!(state.phase, RoundPhase::Placing);
        assert!(state.stones.is_empty());
    }
}
