//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Per-tick physics units, no wall clock
//! - Stable iteration order (placement order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, resolve_collisions, resolve_pair, stone_contact};
pub use input::{InputEvent, handle_input, launch_velocity};
pub use scoring::{closest_distance, determine_winner, is_round_complete};
pub use snapshot::{FrameSnapshot, StoneView};
pub use state::{GameEvent, Gesture, MatchState, RoundOutcome, RoundPhase, Stone, Team};
pub use tick::{integrate, tick};
