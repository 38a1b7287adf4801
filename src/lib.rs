//! Curling Simulator - a two-team stone-sliding game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (stones, friction, collisions, scoring, round state)
//! - `scoreboard`: In-memory win tallies across rounds
//! - `settings`: Match and field configuration

pub mod scoreboard;
pub mod settings;
pub mod sim;

pub use scoreboard::Scoreboard;
pub use settings::Settings;

use glam::Vec2;

/// Physics constants. These are fixed, not part of `Settings`.
pub mod consts {
    /// Radius shared by every stone (pixels)
    pub const STONE_RADIUS: f32 = 24.0;
    /// Mass given to newly placed stones
    pub const STONE_MASS: f32 = 18.0;

    /// Per-tick multiplicative velocity decay
    pub const FRICTION: f32 = 0.98;
    /// Velocity components below this (on both axes) snap to zero
    pub const REST_EPSILON: f32 = 0.1;

    /// Converts a press-to-release drag (pixels) into launch velocity (pixels/tick)
    pub const LAUNCH_SCALE: f32 = 0.1;

    /// Stones are placed this far from the left edge of the sheet
    pub const LAUNCH_X: f32 = 85.0;
    /// The scoring target sits this far from the right edge of the sheet
    pub const TARGET_INSET: f32 = 100.0;
}

/// Vertical centerline of a pixel field (integer half height)
#[inline]
pub fn centerline(field_height: f32) -> f32 {
    (field_height / 2.0).floor()
}

/// Squared distance between two points
#[inline]
pub fn distance_squared(a: Vec2, b: Vec2) -> f32 {
    (a - b).length_squared()
}
