//! Obstacle and coin spawning
//!
//! Two independent cadences place new entities at `SPAWN_Z` in a random
//! lane. Rolls go through the state's seeded RNG only.

use rand::Rng;

use super::state::{EntityKind, GameEvent, GameState, Lane, ObstacleKind};
use crate::consts::*;

/// Pick a lane uniformly
pub fn roll_lane<R: Rng>(rng: &mut R) -> Lane {
    Lane::new(rng.random_range(0..LANE_COUNT))
}

/// Pick an obstacle variant uniformly
pub fn roll_obstacle_kind<R: Rng>(rng: &mut R) -> ObstacleKind {
    ObstacleKind::from_index(rng.random_range(0..OBSTACLE_KINDS))
}

/// Spawn one obstacle ahead of the player and announce it
pub fn spawn_obstacle(state: &mut GameState) -> u32 {
    let lane = roll_lane(&mut state.rng);
    let kind = roll_obstacle_kind(&mut state.rng);
    let id = state.push_entity(EntityKind::Obstacle(kind), lane, SPAWN_Z);
    state.stats.obstacles_spawned += 1;
    state.emit(GameEvent::ObstacleAppeared {
        subtype: kind.index(),
    });
    log::debug!("Obstacle {} ({:?}) in lane {}", id, kind, lane.index());
    id
}

/// Spawn one coin ahead of the player (coins are silent)
pub fn spawn_coin(state: &mut GameState) -> u32 {
    let lane = roll_lane(&mut state.rng);
    let id = state.push_entity(EntityKind::Coin, lane, SPAWN_Z);
    state.stats.coins_spawned += 1;
    log::debug!("Coin {} in lane {}", id, lane.index());
    id
}

/// Fire whichever spawn cadences are due at `now_us`
pub fn run_spawner(state: &mut GameState, now_us: u64) {
    if !state.is_running() {
        return;
    }

    if now_us >= state.timers.next_obstacle_us {
        spawn_obstacle(state);
        state.timers.next_obstacle_us += OBSTACLE_INTERVAL_US;
    }

    if now_us >= state.timers.next_coin_us {
        spawn_coin(state);
        state.timers.next_coin_us += COIN_INTERVAL_US;
    }
}
