//! Collision and scoring
//!
//! The player occupies Z = 0 in its current lane. Anything in that lane
//! strictly inside `(BAND_MIN_Z, BAND_MAX_Z)` is touching the player:
//! coins are collected, obstacles end the run unless the player is in the
//! air. Checks run against post-motion positions every frame, so an
//! obstacle still in the band when a jump ends is fatal on that frame.

use super::speed::apply_score_speed;
use super::state::{EntityKind, GameEvent, GameState, Lane};
use super::tick::end_run;
use crate::consts::*;

/// Whether a Z position lies inside the collision band
#[inline]
pub fn in_band(z: f32) -> bool {
    z > BAND_MIN_Z && z < BAND_MAX_Z
}

/// Whether an entity at (`lane`, `z`) touches a player in `player_lane`
#[inline]
pub fn touches_player(lane: Lane, z: f32, player_lane: Lane) -> bool {
    lane == player_lane && in_band(z)
}

/// Resolve every entity touching the player, in creation order.
///
/// Stops at the first fatal obstacle; entities after it are not examined.
pub fn resolve_collisions(state: &mut GameState) {
    if !state.is_running() {
        return;
    }

    state.normalize_order();
    let player_lane = state.player.lane;

    let mut i = 0;
    while i < state.entities.len() {
        let (kind, lane, z) = {
            let e = &state.entities[i];
            (e.kind, e.lane, e.z)
        };
        if !touches_player(lane, z, player_lane) {
            i += 1;
            continue;
        }

        match kind {
            EntityKind::Coin => {
                state.entities.remove(i);
                collect_coin(state);
            }
            EntityKind::Obstacle(_) if state.player.jumping => {
                // Cleared by the jump; recycled later by position
                i += 1;
            }
            EntityKind::Obstacle(kind) => {
                let obstacle = state.entities.remove(i);
                log::info!(
                    "Hit {:?} #{} in lane {} at {:.2}s, score {}",
                    kind,
                    obstacle.id,
                    player_lane.index(),
                    state.elapsed_secs(),
                    state.score
                );
                end_run(state);
                break;
            }
        }
    }
}

/// Award a coin: score, events, then the score-derived speed
fn collect_coin(state: &mut GameState) {
    state.score += COIN_REWARD;
    state.stats.coins_collected += 1;
    state.emit(GameEvent::CoinCollected {
        points: COIN_REWARD,
    });
    state.emit(GameEvent::ScoreChanged { score: state.score });
    apply_score_speed(state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{GamePhase, ObstacleKind};

    fn running_state() -> GameState {
        let mut state = GameState::new(5);
        state.phase = GamePhase::Running;
        state.player.lane = Lane::new(1);
        state
    }

    const ROCK: EntityKind = EntityKind::Obstacle(ObstacleKind::StoneBlock);

    #[test]
    fn band_is_exclusive() {
        assert!(!in_band(2.0));
        assert!(!in_band(-2.0));
        assert!(in_band(1.999));
        assert!(in_band(-1.999));
        assert!(in_band(0.0));
    }

    #[test]
    fn coin_in_band_is_collected() {
        let mut state = running_state();
        state.push_entity(EntityKind::Coin, Lane::new(1), 0.5);
        resolve_collisions(&mut state);
        assert_eq!(state.score, 10);
        assert_eq!(state.stats.coins_collected, 1);
        assert!(state.entities.is_empty());
        assert_eq!(
            state.events,
            vec![
                GameEvent::CoinCollected { points: 10 },
                GameEvent::ScoreChanged { score: 10 }
            ]
        );
    }

    #[test]
    fn coin_collected_while_jumping() {
        let mut state = running_state();
        state.player.jumping = true;
        state.push_entity(EntityKind::Coin, Lane::new(1), -1.0);
        resolve_collisions(&mut state);
        assert_eq!(state.score, 10);
    }

    #[test]
    fn other_lane_is_ignored() {
        let mut state = running_state();
        state.push_entity(EntityKind::Coin, Lane::new(2), 0.0);
        state.push_entity(ROCK, Lane::new(0), 0.0);
        resolve_collisions(&mut state);
        assert_eq!(state.score, 0);
        assert!(state.events.is_empty());
        assert_eq!(state.entities.len(), 2);
        assert!(state.is_running());
    }

    #[test]
    fn grounded_obstacle_ends_run() {
        let mut state = running_state();
        state.push_entity(EntityKind::Coin, Lane::new(3), 50.0);
        state.push_entity(ROCK, Lane::new(1), 1.0);
        resolve_collisions(&mut state);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.entities.is_empty());
        assert_eq!(state.events, vec![GameEvent::GameOver]);
    }

    #[test]
    fn jumping_player_clears_obstacle() {
        let mut state = running_state();
        state.player.jumping = true;
        state.push_entity(ROCK, Lane::new(1), 0.0);
        resolve_collisions(&mut state);
        assert_eq!(state.entities.len(), 1);
        assert!(state.is_running());
    }

    #[test]
    fn resolution_follows_creation_order() {
        let mut state = running_state();
        state.push_entity(EntityKind::Coin, Lane::new(1), 0.2);
        state.push_entity(ROCK, Lane::new(1), 0.1);
        state.push_entity(EntityKind::Coin, Lane::new(1), 0.0);

        resolve_collisions(&mut state);
        // The coin behind the obstacle is never reached
        assert_eq!(state.stats.coins_collected, 1);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.score, 10);

        let game_overs = state
            .events
            .iter()
            .filter(|e| **e == GameEvent::GameOver)
            .count();
        assert_eq!(game_overs, 1);
    }

    #[test]
    fn nothing_resolves_outside_running() {
        let mut state = GameState::new(5);
        state.push_entity(ROCK, Lane::new(1), 0.0);
        resolve_collisions(&mut state);
        assert_eq!(state.entities.len(), 1);
        assert_eq!(state.phase, GamePhase::NotStarted);
    }
}
