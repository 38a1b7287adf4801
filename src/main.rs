//! Curling Simulator headless driver
//!
//! Plays one scripted round at the configured tick rate and prints frame
//! snapshots as JSON lines, for piping into an external renderer.
//!
//! Usage: `curling-sim [settings.json] [--fast]`

use std::path::Path;
use std::time::{Duration, Instant};

use glam::Vec2;

use curling_sim::Settings;
use curling_sim::sim::{
    FrameSnapshot, GameEvent, InputEvent, MatchState, RoundPhase, Team, handle_input, tick,
};

/// Maximum ticks run per frame to prevent spiral of death
const MAX_SUBSTEPS: u32 = 8;

/// Release offsets (from the launch point) cycled through by the script
const THROWS: [(f32, f32); 5] = [
    (254.0, 0.0),
    (252.0, -14.0),
    (256.0, 12.0),
    (250.0, 4.0),
    (258.0, -6.0),
];

/// Scripted thrower: waits for the sheet to settle, then places and flings
/// the next stone.
struct Script {
    throws_made: usize,
}

impl Script {
    fn next_inputs(&mut self, state: &MatchState) -> Vec<InputEvent> {
        if state.phase != RoundPhase::Placing || !state.stones.iter().all(|s| s.is_at_rest()) {
            return Vec::new();
        }

        let start = state.settings.launch_position();
        let (dx, dy) = THROWS[self.throws_made % THROWS.len()];
        self.throws_made += 1;
        vec![
            InputEvent::PlaceStone,
            InputEvent::Press(start),
            InputEvent::Release(start + Vec2::new(dx, dy)),
        ]
    }
}

fn emit(state: &MatchState) {
    match FrameSnapshot::capture(state).to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize frame: {}", e),
    }
}

fn main() {
    env_logger::init();
    log::info!("Curling Simulator (headless) starting...");

    let mut settings_path = None;
    let mut fast = false;
    for arg in std::env::args().skip(1) {
        if arg == "--fast" {
            fast = true;
        } else {
            settings_path = Some(arg);
        }
    }

    let settings = match settings_path {
        Some(path) => Settings::load_from(Path::new(&path)),
        None => Settings::default(),
    };
    log::info!(
        "{} stones per team on a {}x{} sheet at {} Hz",
        settings.max_stones_per_team,
        settings.field_width,
        settings.field_height,
        settings.tick_rate_hz
    );

    let dt = settings.tick_dt();
    let mut state = MatchState::new(settings);
    let mut script = Script { throws_made: 0 };
    let mut accumulator = 0.0f32;
    let mut last = Instant::now();

    'frames: loop {
        let now = Instant::now();
        accumulator += if fast {
            dt * MAX_SUBSTEPS as f32
        } else {
            (now - last).as_secs_f32().min(0.1)
        };
        last = now;

        let mut substeps = 0;
        while accumulator >= dt && substeps < MAX_SUBSTEPS {
            for input in script.next_inputs(&state) {
                if let Some(event) = handle_input(&mut state, input) {
                    log::debug!("{:?}", event);
                }
            }

            for event in tick(&mut state) {
                match event {
                    GameEvent::RoundResolved(outcome) => {
                        log::info!("Round over: {}", outcome.text());
                        emit(&state);
                    }
                    GameEvent::RoundRestarted => {
                        emit(&state);
                        break 'frames;
                    }
                    _ => {}
                }
            }

            accumulator -= dt;
            substeps += 1;
        }

        if !fast {
            std::thread::sleep(Duration::from_secs_f32(dt));
        }
    }

    let leader = state
        .scoreboard
        .leader()
        .map(|team| team.as_str())
        .unwrap_or("nobody");
    log::info!(
        "Final tally - Green {} : Yellow {} ({} leads)",
        state.scoreboard.wins(Team::Green),
        state.scoreboard.wins(Team::Yellow),
        leader
    );
}
