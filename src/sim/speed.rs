//! Game clock and speed model
//!
//! Two rules share authority over `GameState::speed`:
//! - a run-time step every `SPEED_STEP_INTERVAL_US`, capped at
//!   `TIMER_SPEED_CAP`. A step pulls a score-raised speed back to the cap.
//! - a score-derived value recomputed on every coin pickup, capped at
//!   `SCORE_SPEED_CAP`. It replaces whatever the timer accumulated.

use super::state::GameState;
use crate::consts::*;

/// Speed implied by a score: one step per `POINTS_PER_SPEED_STEP` points
pub fn speed_for_score(score: u32) -> f32 {
    let increase = (score / POINTS_PER_SPEED_STEP).min(MAX_SCORE_SPEED_INCREASE);
    (BASE_SPEED + increase as f32).min(SCORE_SPEED_CAP)
}

/// Speed after one timer step
pub fn timer_step(speed: f32) -> f32 {
    (speed + 1.0).min(TIMER_SPEED_CAP)
}

/// Apply every timer step that is due at `now_us`
pub fn run_speed_timer(state: &mut GameState, now_us: u64) {
    while now_us >= state.timers.next_speed_step_us {
        let before = state.speed;
        state.speed = timer_step(state.speed);
        state.timers.next_speed_step_us += SPEED_STEP_INTERVAL_US;
        if state.speed != before {
            log::debug!("Speed step: {} -> {}", before, state.speed);
        }
    }
}

/// Re-derive speed from score (called after each coin pickup)
pub fn apply_score_speed(state: &mut GameState) {
    let before = state.speed;
    state.speed = speed_for_score(state.score);
    if state.speed != before {
        log::debug!(
            "Score {} sets speed: {} -> {}",
            state.score,
            before,
            state.speed
        );
    }
}

/// Clamp a host frame delta to what one tick may consume.
/// Negative, NaN and infinite deltas become zero.
pub fn clamp_frame_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt.min(MAX_FRAME_DT)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_speed_formula() {
        assert_eq!(speed_for_score(0), 15.0);
        assert_eq!(speed_for_score(10), 15.0);
        assert_eq!(speed_for_score(30), 16.0);
        assert_eq!(speed_for_score(90), 18.0);
        assert_eq!(speed_for_score(750), 40.0);
        assert_eq!(speed_for_score(100_000), 40.0);
    }

    #[test]
    fn timer_steps_to_soft_cap() {
        let mut speed = BASE_SPEED;
        for _ in 0..50 {
            speed = timer_step(speed);
        }
        assert_eq!(speed, TIMER_SPEED_CAP);
        assert_eq!(timer_step(29.5), TIMER_SPEED_CAP);
        assert_eq!(timer_step(35.0), TIMER_SPEED_CAP);
    }

    #[test]
    fn timer_recaps_score_raised_speed() {
        let mut state = GameState::new(1);
        state.score = 600;
        apply_score_speed(&mut state);
        assert_eq!(state.speed, 35.0);

        run_speed_timer(&mut state, 5_000_000);
        assert_eq!(state.speed, TIMER_SPEED_CAP);
        assert_eq!(state.timers.next_speed_step_us, 10_000_000);
    }

    #[test]
    fn timer_fires_on_cadence() {
        let mut state = GameState::new(1);
        run_speed_timer(&mut state, 4_999_999);
        assert_eq!(state.speed, 15.0);
        run_speed_timer(&mut state, 5_000_000);
        assert_eq!(state.speed, 16.0);
        run_speed_timer(&mut state, 9_999_999);
        assert_eq!(state.speed, 16.0);
        run_speed_timer(&mut state, 10_000_000);
        assert_eq!(state.speed, 17.0);
    }

    #[test]
    fn score_rule_overrides_timer() {
        let mut state = GameState::new(1);
        state.speed = 22.0;
        state.score = 10;
        apply_score_speed(&mut state);
        assert_eq!(state.speed, 15.0);
    }

    #[test]
    fn garbage_deltas_are_clamped() {
        assert_eq!(clamp_frame_dt(-1.0), 0.0);
        assert_eq!(clamp_frame_dt(f32::NAN), 0.0);
        assert_eq!(clamp_frame_dt(f32::INFINITY), 0.0);
        assert_eq!(clamp_frame_dt(5.0), MAX_FRAME_DT);
        assert_eq!(clamp_frame_dt(0.016), 0.016);
    }
}
