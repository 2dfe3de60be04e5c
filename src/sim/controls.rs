//! Lane and jump controller
//!
//! Turns held intents into discrete lane changes and timed jumps. Every
//! action fires on the press edge only; holding an intent never repeats it.

use super::state::{GameEvent, GameState};
use super::tick::TickInput;
use crate::consts::JUMP_DURATION_US;

/// Per-intent "this press was already consumed" flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntentLatch {
    pub left_consumed: bool,
    pub right_consumed: bool,
    /// Jump was held on the previous frame
    pub jump_held: bool,
}

/// Apply one frame of intents to the player.
///
/// Left is evaluated before right, so holding both resolves to a left move
/// this frame and a right move on the next.
pub fn apply_intents(state: &mut GameState, input: &TickInput, now_us: u64) {
    let latch = &mut state.latch;
    let player = &mut state.player;

    if input.move_left && !latch.left_consumed {
        player.lane = player.lane.left();
        latch.left_consumed = true;
    } else if input.move_right && !latch.right_consumed {
        player.lane = player.lane.right();
        latch.right_consumed = true;
    }

    if !input.move_left {
        latch.left_consumed = false;
    }
    if !input.move_right {
        latch.right_consumed = false;
    }

    let jump_edge = input.jump && !latch.jump_held;
    latch.jump_held = input.jump;

    if jump_edge {
        // A jump whose deadline is `now` has already landed for this press
        expire_jump(state, now_us);
        if !state.player.jumping {
            let player = &mut state.player;
            player.jumping = true;
            player.jump_started_us = now_us;
            player.jump_deadline_us = now_us + JUMP_DURATION_US;
            state.emit(GameEvent::JumpStarted);
        }
    }
}

/// End the jump once its deadline has passed. Fires at most once per jump.
pub fn expire_jump(state: &mut GameState, now_us: u64) {
    if state.player.jumping && now_us >= state.player.jump_deadline_us {
        state.player.jumping = false;
        state.emit(GameEvent::JumpLanded);
    }
}
