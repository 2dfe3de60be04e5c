//! Game facade for hosts
//!
//! Wraps `GameState` behind the calls a frame loop makes: set intents,
//! tick, then drain events and read a snapshot for rendering.

use glam::Vec3;
use serde::Serialize;

use crate::sim::{
    self, Entity, EntityKind, GameEvent, GamePhase, GameState, PlayerState, RunStats, TickInput,
};

/// A single entity as presentation sees it
#[derive(Debug, Clone, Serialize)]
pub struct EntityView {
    pub id: u32,
    pub kind: EntityKind,
    pub lane: u8,
    pub position: Vec3,
}

impl From<&Entity> for EntityView {
    fn from(entity: &Entity) -> Self {
        Self {
            id: entity.id,
            kind: entity.kind,
            lane: entity.lane.index(),
            position: entity.world_position(),
        }
    }
}

/// Read-only view of a frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub speed: f32,
    pub elapsed_secs: f32,
    pub player_lane: u8,
    pub player_position: Vec3,
    pub jumping: bool,
    pub road_offset: f32,
    pub entities: Vec<EntityView>,
}

/// One game session; survives any number of runs
pub struct Game {
    state: GameState,
    input: TickInput,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self::from_state(GameState::new(seed))
    }

    /// Wrap a prepared state (custom RNG, pre-placed entities)
    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            input: TickInput::none(),
        }
    }

    /// Start a run. No-op while a run is already in progress.
    pub fn start(&mut self) -> bool {
        sim::start_run(&mut self.state)
    }

    /// Replace the held intents used by the next `tick`
    pub fn set_intents(&mut self, move_left: bool, move_right: bool, jump: bool) {
        self.input = TickInput {
            move_left,
            move_right,
            jump,
        };
    }

    pub fn set_input(&mut self, input: TickInput) {
        self.input = input;
    }

    pub fn input(&self) -> TickInput {
        self.input
    }

    /// Advance one frame. Before `start` (or after game over) this does nothing.
    pub fn tick(&mut self, dt: f32) {
        sim::tick(&mut self.state, &self.input, dt);
    }

    /// Take every event produced since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn speed(&self) -> f32 {
        self.state.speed
    }

    pub fn player(&self) -> &PlayerState {
        &self.state.player
    }

    pub fn stats(&self) -> RunStats {
        self.state.stats
    }

    pub fn elapsed_secs(&self) -> f32 {
        self.state.elapsed_secs()
    }

    /// Active obstacles and coins in creation order
    pub fn entities(&self) -> &[Entity] {
        &self.state.entities
    }

    pub fn player_position(&self) -> Vec3 {
        self.state.player.world_position(self.state.clock_us)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for tests and tooling
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.state.phase,
            score: self.state.score,
            speed: self.state.speed,
            elapsed_secs: self.state.elapsed_secs(),
            player_lane: self.state.player.lane.index(),
            player_position: self.player_position(),
            jumping: self.state.player.jumping,
            road_offset: self.state.scenery.road_offset,
            entities: self.state.entities.iter().map(EntityView::from).collect(),
        }
    }
}
