//! Match and field settings
//!
//! Loaded from an optional JSON file by the native driver. Physics constants
//! (friction, mass, radius) live in `consts` and are not configurable.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::centerline;
use crate::consts::{LAUNCH_X, TARGET_INSET};

/// Upper bound on stones per team accepted from a settings file
pub const MAX_STONES_PER_TEAM: u32 = 64;

/// Match settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Stones each team throws per round
    pub max_stones_per_team: u32,

    // === Field ===
    /// Sheet width in pixels
    pub field_width: f32,
    /// Sheet height in pixels
    pub field_height: f32,

    // === Timing ===
    /// Simulation ticks per second
    pub tick_rate_hz: u32,
    /// Pause between a resolved round and the next one (seconds)
    pub resolve_delay_secs: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_stones_per_team: 5,

            field_width: 1456.0,
            field_height: 523.0,

            tick_rate_hz: 60,
            resolve_delay_secs: 3.0,
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::validated)
    }

    /// Serialize settings to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp values into a playable range
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();
        self.max_stones_per_team = self.max_stones_per_team.clamp(1, MAX_STONES_PER_TEAM);
        if self.field_width <= 0.0 {
            self.field_width = defaults.field_width;
        }
        if self.field_height <= 0.0 {
            self.field_height = defaults.field_height;
        }
        self.tick_rate_hz = self.tick_rate_hz.max(1);
        if self.resolve_delay_secs < 0.0 {
            self.resolve_delay_secs = 0.0;
        }
        self
    }

    /// Total stones in a round (both teams)
    pub fn stones_per_round(&self) -> u32 {
        self.max_stones_per_team.saturating_mul(2)
    }

    /// Where newly placed stones appear
    pub fn launch_position(&self) -> Vec2 {
        Vec2::new(LAUNCH_X, centerline(self.field_height))
    }

    /// The scoring target (near the far end, vertically centered)
    pub fn target(&self) -> Vec2 {
        Vec2::new(self.field_width - TARGET_INSET, centerline(self.field_height))
    }

    /// Length of the post-round pause in ticks
    pub fn resolve_delay_ticks(&self) -> u32 {
        (self.resolve_delay_secs * self.tick_rate_hz as f32).round() as u32
    }

    /// Fixed timestep in seconds, for drivers pacing the loop
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_rate_hz as f32
    }
}
