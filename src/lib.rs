//! Temple Runner - A four-lane endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (lanes, spawning, motion, collisions, speed)
//! - `game`: Collaborator-facing facade (start, intents, tick, queries, events)
//! - `input`: Keyboard/touch intent aggregation
//! - `audio`: Event-to-sound cue mapping
//! - `settings`: Run-time preferences

pub mod audio;
pub mod game;
pub mod input;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use input::InputAggregator;
pub use settings::{Settings, SettingsError};
pub use sim::{GameEvent, GamePhase, TickInput};

/// Gameplay contract constants
pub mod consts {
    /// Number of lanes
    pub const LANE_COUNT: u8 = 4;
    /// World X offset per lane index (0 = far-left, 3 = far-right)
    pub const LANE_X: [f32; LANE_COUNT as usize] = [3.0, 1.0, -1.0, -3.0];
    /// Lane the player occupies when a run starts
    pub const START_LANE: u8 = 1;
    /// Rendered X interpolation factor applied once per frame
    pub const LANE_SMOOTHING: f32 = 0.3;

    /// Largest frame delta the simulation will consume (seconds).
    /// At max speed an entity moves 2 units per frame, half the band width.
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Entities spawn this far ahead of the player
    pub const SPAWN_Z: f32 = 100.0;
    /// Entities behind this Z are discarded
    pub const RECYCLE_Z: f32 = -20.0;
    /// Collision band (exclusive on both ends)
    pub const BAND_MIN_Z: f32 = -2.0;
    pub const BAND_MAX_Z: f32 = 2.0;

    /// Spawn cadences (microseconds of run time)
    pub const OBSTACLE_INTERVAL_US: u64 = 2_000_000;
    pub const COIN_INTERVAL_US: u64 = 1_500_000;
    /// Number of obstacle visual variants
    pub const OBSTACLE_KINDS: u8 = 3;

    /// Jump window (microseconds)
    pub const JUMP_DURATION_US: u64 = 500_000;
    /// Presentation jump arc: lands exactly when the jump window closes
    pub const JUMP_LAUNCH_VELOCITY: f32 = 20.0;
    pub const JUMP_GRAVITY: f32 = 80.0;

    /// Points per coin
    pub const COIN_REWARD: u32 = 10;

    /// Speed model
    pub const BASE_SPEED: f32 = 15.0;
    pub const SPEED_STEP_INTERVAL_US: u64 = 5_000_000;
    pub const TIMER_SPEED_CAP: f32 = 30.0;
    pub const SCORE_SPEED_CAP: f32 = 40.0;
    pub const MAX_SCORE_SPEED_INCREASE: u32 = 25;
    pub const POINTS_PER_SPEED_STEP: u32 = 30;

    /// Render heights above the road
    pub const OBSTACLE_HEIGHT: f32 = 0.5;
    pub const COIN_HEIGHT: f32 = 1.0;
}

/// World X offset of a lane; out-of-range indices clamp to the outermost lane
#[inline]
pub fn lane_x(lane: u8) -> f32 {
    let idx = (lane as usize).min(consts::LANE_X.len() - 1);
    consts::LANE_X[idx]
}

/// Convert seconds to whole microseconds of run time
#[inline]
pub fn secs_to_us(secs: f32) -> u64 {
    if secs.is_finite() && secs > 0.0 {
        (secs as f64 * 1_000_000.0).round() as u64
    } else {
        0
    }
}
