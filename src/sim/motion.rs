//! World motion and recycling
//!
//! The player stays at Z = 0; the world scrolls toward it.

use super::state::GameState;
use crate::consts::RECYCLE_Z;

/// Move every entity toward the player by `speed * dt`
pub fn advance_entities(state: &mut GameState, dt: f32) {
    let step = state.speed * dt;
    for entity in &mut state.entities {
        entity.z -= step;
    }
}

/// Drop entities that scrolled past `RECYCLE_Z`. Returns how many were removed.
pub fn recycle_entities(state: &mut GameState) -> usize {
    let before = state.entities.len();
    let mut obstacles_passed = 0;
    state.entities.retain(|e| {
        let keep = e.z >= RECYCLE_Z;
        if !keep && e.is_obstacle() {
            obstacles_passed += 1;
        }
        keep
    });
    state.stats.obstacles_passed += obstacles_passed;
    before - state.entities.len()
}

/// Advance the whole world one frame: entities, then scenery
pub fn advance_world(state: &mut GameState, dt: f32) {
    advance_entities(state, dt);
    recycle_entities(state);
    let speed = state.speed;
    state.scenery.advance(speed, dt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{EntityKind, Lane, ObstacleKind};

    #[test]
    fn entities_move_by_speed_times_dt() {
        let mut state = GameState::new(1);
        state.speed = 20.0;
        state.push_entity(EntityKind::Coin, Lane::new(0), 100.0);
        advance_entities(&mut state, 0.05);
        assert!((state.entities[0].z - 99.0).abs() < 1e-5);
    }

    #[test]
    fn entities_behind_recycle_z_are_removed() {
        let mut state = GameState::new(1);
        state.push_entity(EntityKind::Coin, Lane::new(0), -19.9);
        state.push_entity(
            EntityKind::Obstacle(ObstacleKind::StoneBlock),
            Lane::new(1),
            -20.5,
        );
        state.push_entity(EntityKind::Coin, Lane::new(2), -25.0);

        let removed = recycle_entities(&mut state);
        assert_eq!(removed, 2);
        assert_eq!(state.entities.len(), 1);
        assert_eq!(state.entities[0].lane.index(), 0);
        assert_eq!(state.stats.obstacles_passed, 1);
    }

    #[test]
    fn recycling_preserves_creation_order() {
        let mut state = GameState::new(1);
        for (i, z) in [5.0, -30.0, 10.0, -40.0, 15.0].into_iter().enumerate() {
            state.push_entity(EntityKind::Coin, Lane::new(i as u8 % 4), z);
        }
        recycle_entities(&mut state);
        let ids: Vec<u32> = state.entities.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }
}
