//! Input aggregation
//!
//! Merges keyboard, on-screen buttons and touch swipes into the three
//! held intents the simulation consumes each frame.

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::TickInput;

/// Logical game action a key or button maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Left,
    Right,
    Jump,
}

impl Action {
    /// Map a DOM-style key name to an action
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(Action::Left),
            "ArrowRight" | "d" | "D" => Some(Action::Right),
            "ArrowUp" | "w" | "W" | " " | "Space" => Some(Action::Jump),
            _ => None,
        }
    }
}

fn set_action(input: &mut TickInput, action: Action, held: bool) {
    match action {
        Action::Left => input.move_left = held,
        Action::Right => input.move_right = held,
        Action::Jump => input.jump = held,
    }
}

/// Held-key state
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardState {
    held: TickInput,
}

impl KeyboardState {
    /// Returns `true` if the key is a game control (host should swallow it)
    pub fn key_down(&mut self, key: &str) -> bool {
        match Action::from_key(key) {
            Some(action) => {
                set_action(&mut self.held, action, true);
                true
            }
            None => false,
        }
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        match Action::from_key(key) {
            Some(action) => {
                set_action(&mut self.held, action, false);
                true
            }
            None => false,
        }
    }

    pub fn held(&self) -> TickInput {
        self.held
    }
}

/// A completed touch gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Left,
    Right,
    Up,
    /// Released without travelling past the threshold
    Tap,
}

impl Swipe {
    pub fn action(self) -> Option<Action> {
        match self {
            Swipe::Left => Some(Action::Left),
            Swipe::Right => Some(Action::Right),
            Swipe::Up | Swipe::Tap => Some(Action::Jump),
        }
    }
}

/// Recognizes swipes from touch start/end points (screen coordinates,
/// Y grows downward)
#[derive(Debug, Clone)]
pub struct SwipeRecognizer {
    start: Option<Vec2>,
    threshold: f32,
}

impl SwipeRecognizer {
    pub fn new(threshold: f32) -> Self {
        Self {
            start: None,
            threshold: threshold.max(1.0),
        }
    }

    pub fn touch_start(&mut self, x: f32, y: f32) {
        self.start = Some(Vec2::new(x, y));
    }

    pub fn touch_cancel(&mut self) {
        self.start = None;
    }

    /// Finish a touch. `None` if no touch was in progress or the gesture
    /// was a downward swipe.
    pub fn touch_end(&mut self, x: f32, y: f32) -> Option<Swipe> {
        let start = self.start.take()?;
        let delta = Vec2::new(x, y) - start;

        if delta.abs().max_element() < self.threshold {
            return Some(Swipe::Tap);
        }
        if delta.x.abs() >= delta.y.abs() {
            Some(if delta.x < 0.0 { Swipe::Left } else { Swipe::Right })
        } else if delta.y < 0.0 {
            Some(Swipe::Up)
        } else {
            None
        }
    }

    pub fn in_progress(&self) -> bool {
        self.start.is_some()
    }
}

impl Default for SwipeRecognizer {
    fn default() -> Self {
        Self::new(crate::settings::DEFAULT_SWIPE_THRESHOLD)
    }
}

/// Merges every intent source into one `TickInput` per frame
#[derive(Debug, Clone, Default)]
pub struct InputAggregator {
    pub keyboard: KeyboardState,
    /// On-screen buttons (held while pressed)
    buttons: TickInput,
    pub swipes: SwipeRecognizer,
    /// One-frame presses from gestures
    pulse: TickInput,
}

impl InputAggregator {
    pub fn new(swipe_threshold: f32) -> Self {
        Self {
            swipes: SwipeRecognizer::new(swipe_threshold),
            ..Default::default()
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.swipe_threshold)
    }

    pub fn key_down(&mut self, key: &str) -> bool {
        self.keyboard.key_down(key)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.keyboard.key_up(key)
    }

    pub fn set_button(&mut self, action: Action, pressed: bool) {
        set_action(&mut self.buttons, action, pressed);
    }

    pub fn touch_start(&mut self, x: f32, y: f32) {
        self.swipes.touch_start(x, y);
    }

    pub fn touch_end(&mut self, x: f32, y: f32) -> Option<Swipe> {
        let swipe = self.swipes.touch_end(x, y)?;
        if let Some(action) = swipe.action() {
            set_action(&mut self.pulse, action, true);
        }
        Some(swipe)
    }

    /// Intents for this frame. Gesture presses are reported once, then
    /// released, so the next gesture is a fresh edge.
    pub fn intents(&mut self) -> TickInput {
        let pulse = std::mem::take(&mut self.pulse);
        self.keyboard.held().merge(self.buttons).merge(pulse)
    }
}
