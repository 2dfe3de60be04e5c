//! Per-frame simulation tick
//!
//! Core game loop that advances the run deterministically. Within one tick
//! the order is fixed:
//! 1. intents -> player lane/jump
//! 2. clock deadlines (jump expiry, speed step)
//! 3. spawner
//! 4. world motion and recycling
//! 5. collisions and scoring against post-motion positions

use super::collision::resolve_collisions;
use super::controls::{IntentLatch, apply_intents, expire_jump};
use super::motion::advance_world;
use super::spawner::run_spawner;
use super::speed::{clamp_frame_dt, run_speed_timer};
use super::state::{GameEvent, GamePhase, GameState, PlayerState, RunStats, RunTimers};
use crate::consts::*;
use crate::secs_to_us;

/// Held intents for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move one lane left (press edge only)
    pub move_left: bool,
    /// Move one lane right (press edge only)
    pub move_right: bool,
    /// Jump (press edge only, ignored while airborne)
    pub jump: bool,
}

impl TickInput {
    pub fn none() -> Self {
        Self::default()
    }

    /// Merge two intent sources; an intent is held if either holds it
    pub fn merge(self, other: TickInput) -> TickInput {
        TickInput {
            move_left: self.move_left || other.move_left,
            move_right: self.move_right || other.move_right,
            jump: self.jump || other.jump,
        }
    }
}

/// Begin a run with a full reset. Returns `false` (and does nothing) if a
/// run is already in progress.
pub fn start_run(state: &mut GameState) -> bool {
    if state.phase == GamePhase::Running {
        return false;
    }

    state.clock_us = 0;
    state.player = PlayerState::default();
    state.latch = IntentLatch::default();
    state.entities.clear();
    state.speed = BASE_SPEED;
    state.timers = RunTimers::starting_at(0);
    state.stats = RunStats::default();
    if state.score != 0 {
        state.score = 0;
        state.emit(GameEvent::ScoreChanged { score: 0 });
    }
    state.phase = GamePhase::Running;
    state.emit(GameEvent::RunStarted);

    log::info!("Run started (seed {})", state.seed);
    true
}

/// End the run: clear the world and every pending deadline in one step
pub fn end_run(state: &mut GameState) {
    state.phase = GamePhase::GameOver;
    state.entities.clear();
    state.player.jumping = false;
    state.timers = RunTimers::starting_at(0);
    state.emit(GameEvent::GameOver);

    log::info!(
        "Game over after {:.2}s: score {}, speed {}, {} coins, {} obstacles passed",
        state.elapsed_secs(),
        state.score,
        state.speed,
        state.stats.coins_collected,
        state.stats.obstacles_passed
    );
}

/// Advance the game state by one frame of `dt` seconds.
///
/// Does nothing unless a run is in progress; the clock does not advance
/// outside `Running`, so no deadlines pile up while stopped.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase != GamePhase::Running {
        return;
    }

    let raw_dt = dt;
    let dt = clamp_frame_dt(raw_dt);
    if !raw_dt.is_finite() || raw_dt < 0.0 {
        log::warn!("Ignoring invalid frame delta {}", raw_dt);
    } else if raw_dt > 1.0 {
        log::warn!("Stalled frame ({:.3}s) clamped to {}s", raw_dt, dt);
    }

    state.clock_us += secs_to_us(dt);
    let now = state.clock_us;

    // 1. Input
    apply_intents(state, input, now);
    state.player.smooth_toward_lane();

    // 2. Clock deadlines
    expire_jump(state, now);
    run_speed_timer(state, now);

    // 3. Spawning
    run_spawner(state, now);

    // 4. Motion
    advance_world(state, dt);

    // 5. Collisions
    resolve_collisions(state);
}
