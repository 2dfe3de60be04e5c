//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Run time comes from summed frame deltas, never the wall clock
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod controls;
pub mod motion;
pub mod scenery;
pub mod spawner;
pub mod speed;
pub mod state;
pub mod tick;

pub use autopilot::demo_input;
pub use collision::{in_band, resolve_collisions, touches_player};
pub use controls::IntentLatch;
pub use scenery::Scenery;
pub use speed::{clamp_frame_dt, speed_for_score};
pub use state::{
    Entity, EntityKind, GameEvent, GamePhase, GameState, Lane, ObstacleKind, PlayerState,
    RunStats, RunTimers, jump_height,
};
pub use tick::{TickInput, end_run, start_run, tick};
