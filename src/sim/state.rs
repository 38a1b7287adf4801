//! Match state and core simulation types
//!
//! Everything the loop owns between ticks lives here. Win tallies persist
//! across rounds; stones and the placement counter are per round.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::distance_squared;
use crate::scoreboard::Scoreboard;
use crate::settings::Settings;

/// Stone ownership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Green,
    Yellow,
}

impl Team {
    /// Team for the n-th stone of a round (even → Green, odd → Yellow)
    pub fn for_placement(count: u32) -> Self {
        if count.is_multiple_of(2) {
            Team::Green
        } else {
            Team::Yellow
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Team::Green => 0,
            Team::Yellow => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Team::Green => "Green",
            Team::Yellow => "Yellow",
        }
    }

    /// Display color as RGB
    pub fn color(&self) -> [u8; 3] {
        match self {
            Team::Green => [0, 255, 0],
            Team::Yellow => [255, 255, 0],
        }
    }
}

/// A curling stone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stone {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub mass: f32,
    team: Team,
}

impl Stone {
    pub fn new(id: u32, team: Team, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            mass: STONE_MASS,
            team,
        }
    }

    pub fn team(&self) -> Team {
        self.team
    }

    /// Advance one tick: move, apply friction, snap slow stones to rest
    pub fn advance(&mut self) {
        self.pos += self.vel;
        self.vel *= FRICTION;

        if self.vel.x.abs() < REST_EPSILON && self.vel.y.abs() < REST_EPSILON {
            self.vel = Vec2::ZERO;
        }
    }

    /// True once friction has snapped the stone to a standstill
    pub fn is_at_rest(&self) -> bool {
        self.vel == Vec2::ZERO
    }

    /// Hit test against the stone's disc
    pub fn contains_point(&self, point: Vec2) -> bool {
        distance_squared(point, self.pos) < STONE_RADIUS * STONE_RADIUS
    }
}

/// Round lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Stones still to be placed
    Placing,
    /// All stones placed, at least one still moving
    Settling,
    /// Winner decided; counting down to the next round
    Resolved { ticks_remaining: u32 },
}

impl RoundPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundPhase::Placing => "Placing",
            RoundPhase::Settling => "Settling",
            RoundPhase::Resolved { .. } => "Resolved",
        }
    }
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Winner(Team),
    Draw,
}

impl RoundOutcome {
    /// Banner text shown while the round is resolved
    pub fn text(&self) -> &'static str {
        match self {
            RoundOutcome::Winner(Team::Green) => "Green Wins!",
            RoundOutcome::Winner(Team::Yellow) => "Yellow Wins!",
            RoundOutcome::Draw => "It's a tie!",
        }
    }
}

/// An in-progress press → drag → release on one stone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gesture {
    pub stone_id: u32,
    /// Where the press landed; launch velocity is measured from here
    pub press: Vec2,
}

/// Notable things that happened during a tick or input dispatch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    StonePlaced { id: u32, team: Team },
    StoneLaunched { id: u32, vel: Vec2 },
    RoundResolved(RoundOutcome),
    RoundRestarted,
}

/// Complete match state, owned by the simulation loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    pub settings: Settings,
    /// Stones in placement order
    pub stones: Vec<Stone>,
    /// Stones placed this round
    pub stone_counter: u32,
    pub phase: RoundPhase,
    /// Outcome of the round currently shown, cleared on restart
    pub outcome: Option<RoundOutcome>,
    pub scoreboard: Scoreboard,
    pub gesture: Option<Gesture>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl MatchState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            stones: Vec::new(),
            stone_counter: 0,
            phase: RoundPhase::Placing,
            outcome: None,
            scoreboard: Scoreboard::new(),
            gesture: None,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// True once both teams have placed all their stones
    pub fn all_stones_placed(&self) -> bool {
        self.stone_counter >= self.settings.stones_per_round()
    }

    /// Place the next stone at the launch position.
    ///
    /// Returns `None` once the round is full or outside `Placing`.
    pub fn place_stone(&mut self) -> Option<&Stone> {
        if self.phase != RoundPhase::Placing || self.all_stones_placed() {
            return None;
        }

        let team = Team::for_placement(self.stone_counter);
        let id = self.next_entity_id();
        self.stones
            .push(Stone::new(id, team, self.settings.launch_position()));
        self.stone_counter += 1;
        self.stones.last()
    }

    /// Nearest stone whose disc contains `point`
    pub fn stone_at(&self, point: Vec2) -> Option<&Stone> {
        self.stones
            .iter()
            .filter(|s| s.contains_point(point))
            .min_by(|a, b| {
                distance_squared(a.pos, point)
                    .partial_cmp(&distance_squared(b.pos, point))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }

    pub fn stone_mut(&mut self, id: u32) -> Option<&mut Stone> {
        self.stones.iter_mut().find(|s| s.id == id)
    }

    /// Stones currently on the sheet for a team
    pub fn placed_count(&self, team: Team) -> usize {
        self.stones.iter().filter(|s| s.team() == team).count()
    }

    /// Drop all stones and start a fresh round. Win tallies are kept.
    pub fn clear_round(&mut self) {
        self.stones.clear();
        self.stone_counter = 0;
        self.gesture = None;
        self.outcome = None;
        self.phase = RoundPhase::Placing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_moves_then_decays() {
        let mut stone = Stone::new(1, Team::Green, Vec2::new(10.0, 10.0));
        stone.vel = Vec2::new(5.0, -2.0);
        stone.advance();
        assert_eq!(stone.pos, Vec2::new(15.0, 8.0));
        assert!((stone.vel.x - 4.9).abs() < 1e-5);
        assert!((stone.vel.y + 1.96).abs() < 1e-5);
    }

    #[test]
    fn test_snap_requires_both_axes_slow() {
        let mut stone = Stone::new(1, Team::Green, Vec2::ZERO);
        stone.vel = Vec2::new(0.05, 2.0);
        stone.advance();
        assert!(!stone.is_at_rest());

        stone.vel = Vec2::new(0.1, -0.1);
        stone.advance();
        assert_eq!(stone.vel, Vec2::ZERO);
        assert!(stone.is_at_rest());
    }

    #[test]
    fn test_placement_alternates_teams() {
        let mut state = MatchState::new(Settings::default());
        let teams: Vec<Team> = (0..4)
            .map(|_| state.place_stone().map(|s| s.team()).unwrap())
            .collect();
        assert_eq!(
            teams,
            vec![Team::Green, Team::Yellow, Team::Green, Team::Yellow]
        );
        assert_eq!(state.placed_count(Team::Green), 2);
        assert_eq!(state.placed_count(Team::Yellow), 2);
        assert!(
            state
                .stones
                .iter()
                .all(|s| s.pos == state.settings.launch_position())
        );
    }

    #[test]
    fn test_placement_limit() {
        let settings = Settings {
            max_stones_per_team: 1,
            ..Default::default()
        };
        let mut state = MatchState::new(settings);
        assert!(state.place_stone().is_some());
        assert!(state.place_stone().is_some());
        assert!(state.place_stone().is_none());
        assert_eq!(state.stones.len(), 2);
        assert_eq!(state.stone_counter, 2);
    }

    #[test]
    fn test_stone_at_prefers_nearest() {
        let mut state = MatchState::new(Settings::default());
        state.stones.push(Stone::new(1, Team::Green, Vec2::new(0.0, 0.0)));
        state.stones.push(Stone::new(2, Team::Yellow, Vec2::new(30.0, 0.0)));

        assert_eq!(state.stone_at(Vec2::new(20.0, 0.0)).map(|s| s.id), Some(2));
        assert_eq!(state.stone_at(Vec2::new(5.0, 0.0)).map(|s| s.id), Some(1));
        // Exactly one radius away is outside the disc
        assert!(state.stone_at(Vec2::new(0.0, -24.0)).is_none());
    }

    #[test]
    fn test_outcome_text() {
        assert_eq!(RoundOutcome::Winner(Team::Green).text(), "Green Wins!");
        assert_eq!(RoundOutcome::Winner(Team::Yellow).text(), "Yellow Wins!");
        assert_eq!(RoundOutcome::Draw.text(), "It's a tie!");
    }
}
