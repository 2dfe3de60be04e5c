//! Idle/demo mode: a simple AI that plays the game
//!
//! Produces ordinary `TickInput`s, so it goes through the same edge rules
//! as a human. Presses are released every other frame to re-arm the edge.

use super::state::{GameState, Lane};
use super::tick::TickInput;
use crate::consts::*;

/// How far ahead the AI reacts to obstacles
const DANGER_DISTANCE: f32 = 12.0;
/// How far ahead the AI chases coins
const COIN_DISTANCE: f32 = 40.0;

/// Nearest obstacle ahead (or in the band) in `lane`, as a Z distance
fn nearest_obstacle(state: &GameState, lane: Lane) -> Option<f32> {
    state
        .entities
        .iter()
        .filter(|e| e.is_obstacle() && e.lane == lane && e.z > BAND_MIN_Z)
        .map(|e| e.z)
        .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
}

/// A lane is safe if no obstacle sits in or just ahead of the band
fn lane_is_safe(state: &GameState, lane: Lane) -> bool {
    nearest_obstacle(state, lane).is_none_or(|z| z > DANGER_DISTANCE)
}

/// Pick the input for this frame
pub fn demo_input(state: &GameState, previous: &TickInput) -> TickInput {
    if *previous != TickInput::none() {
        return TickInput::none();
    }

    let lane = state.player.lane;
    let left = lane.left();
    let right = lane.right();

    if let Some(z) = nearest_obstacle(state, lane).filter(|z| *z <= DANGER_DISTANCE) {
        if left != lane && lane_is_safe(state, left) {
            return TickInput {
                move_left: true,
                ..TickInput::none()
            };
        }
        if right != lane && lane_is_safe(state, right) {
            return TickInput {
                move_right: true,
                ..TickInput::none()
            };
        }
        // Boxed in: jump just before the band so the window covers it
        let reach = BAND_MAX_Z + state.speed * 0.1;
        if !state.player.jumping && z <= reach {
            return TickInput {
                jump: true,
                ..TickInput::none()
            };
        }
        return TickInput::none();
    }

    // Chase the nearest coin ahead, one safe lane at a time
    let coin = state
        .entities
        .iter()
        .filter(|e| e.is_coin() && e.z > BAND_MAX_Z && e.z < COIN_DISTANCE)
        .min_by(|a, b| a.z.partial_cmp(&b.z).unwrap_or(std::cmp::Ordering::Equal));

    match coin {
        Some(c) if c.lane < lane && lane_is_safe(state, left) => TickInput {
            move_left: true,
            ..TickInput::none()
        },
        Some(c) if c.lane > lane && lane_is_safe(state, right) => TickInput {
            move_right: true,
            ..TickInput::none()
        },
        _ => TickInput::none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{EntityKind, GamePhase, ObstacleKind};

    #[test]
    fn dodges_obstacle_ahead() {
        let mut state = GameState::new(3);
        state.phase = GamePhase::Running;
        state.push_entity(
            EntityKind::Obstacle(ObstacleKind::StoneBlock),
            state.player.lane,
            8.0,
        );
        let input = demo_input(&state, &TickInput::none());
        assert!(input.move_left || input.move_right);
    }

    #[test]
    fn releases_between_presses() {
        let state = GameState::new(3);
        let pressed = TickInput {
            move_left: true,
            ..TickInput::none()
        };
        assert_eq!(demo_input(&state, &pressed), TickInput::none());
    }

    #[test]
    fn chases_coin() {
        let mut state = GameState::new(3);
        state.player.lane = Lane::new(1);
        state.push_entity(EntityKind::Coin, Lane::new(3), 20.0);
        let input = demo_input(&state, &TickInput::none());
        assert!(input.move_right);
    }
}
