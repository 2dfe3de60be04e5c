//! Game state and core simulation types
//!
//! Everything the frame tick reads or writes lives in `GameState`.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::controls::IntentLatch;
use super::scenery::Scenery;
use crate::consts::*;
use crate::lane_x;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, nothing moves
    #[default]
    NotStarted,
    /// Active gameplay
    Running,
    /// Run ended by an obstacle collision
    GameOver,
}

/// A lane index in `0..LANE_COUNT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Lane(u8);

impl Lane {
    pub const FAR_LEFT: Lane = Lane(0);
    pub const FAR_RIGHT: Lane = Lane(LANE_COUNT - 1);

    /// Build a lane, clamping out-of-range indices to the nearest edge lane
    pub fn new(index: u8) -> Self {
        Self(index.min(LANE_COUNT - 1))
    }

    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    /// World X offset of this lane
    #[inline]
    pub fn x(self) -> f32 {
        lane_x(self.0)
    }

    /// One lane to the left, clamped at lane 0
    pub fn left(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    /// One lane to the right, clamped at the last lane
    pub fn right(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }
}

impl Default for Lane {
    fn default() -> Self {
        Self(START_LANE)
    }
}

/// The runner
#[derive(Debug, Clone)]
pub struct PlayerState {
    /// Lane used for collisions. Changes are immediate; only `render_x` lags.
    pub lane: Lane,
    /// Inside the jump window
    pub jumping: bool,
    /// Run time the current jump began (microseconds)
    pub jump_started_us: u64,
    /// Run time the current jump ends (microseconds)
    pub jump_deadline_us: u64,
    /// Smoothed X position for rendering
    pub render_x: f32,
}

impl Default for PlayerState {
    fn default() -> Self {
        let lane = Lane::default();
        Self {
            lane,
            jumping: false,
            jump_started_us: 0,
            jump_deadline_us: 0,
            render_x: lane.x(),
        }
    }
}

impl PlayerState {
    /// Ease the rendered X toward the current lane (one frame's worth)
    pub fn smooth_toward_lane(&mut self) {
        let target = self.lane.x();
        self.render_x += (target - self.render_x) * LANE_SMOOTHING;
    }

    /// Visual jump height at run time `now_us` (0 when grounded)
    pub fn jump_height(&self, now_us: u64) -> f32 {
        if !self.jumping {
            return 0.0;
        }
        let elapsed = now_us.saturating_sub(self.jump_started_us) as f32 / 1_000_000.0;
        jump_height(elapsed)
    }

    /// Render position of the player (the player sits at Z = 0)
    pub fn world_position(&self, now_us: u64) -> Vec3 {
        Vec3::new(self.render_x, self.jump_height(now_us), 0.0)
    }
}

/// Height of the presentation jump arc `elapsed` seconds after take-off.
///
/// Constant upward launch velocity with constant downward acceleration;
/// grounded once the height would fall to zero or below.
pub fn jump_height(elapsed: f32) -> f32 {
    if !(elapsed > 0.0) {
        return 0.0;
    }
    let h = JUMP_LAUNCH_VELOCITY * elapsed - 0.5 * JUMP_GRAVITY * elapsed * elapsed;
    h.max(0.0)
}

/// Obstacle visual variants (no gameplay effect)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    StoneBlock,
    FallenLog,
    TempleDebris,
}

impl ObstacleKind {
    /// Map a rolled subtype index to a variant; indices wrap
    pub fn from_index(index: u8) -> Self {
        match index % OBSTACLE_KINDS {
            0 => ObstacleKind::StoneBlock,
            1 => ObstacleKind::FallenLog,
            _ => ObstacleKind::TempleDebris,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            ObstacleKind::StoneBlock => 0,
            ObstacleKind::FallenLog => 1,
            ObstacleKind::TempleDebris => 2,
        }
    }
}

/// What a movable entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Obstacle(ObstacleKind),
    Coin,
}

/// An obstacle or coin scrolling toward the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Creation-ordered unique id
    pub id: u32,
    pub kind: EntityKind,
    pub lane: Lane,
    /// Distance ahead of the player (negative = behind)
    pub z: f32,
}

impl Entity {
    pub fn is_obstacle(&self) -> bool {
        matches!(self.kind, EntityKind::Obstacle(_))
    }

    pub fn is_coin(&self) -> bool {
        self.kind == EntityKind::Coin
    }

    /// Visual subtype index for obstacles
    pub fn subtype(&self) -> Option<u8> {
        match self.kind {
            EntityKind::Obstacle(kind) => Some(kind.index()),
            EntityKind::Coin => None,
        }
    }

    /// Render position of the entity
    pub fn world_position(&self) -> Vec3 {
        let y = match self.kind {
            EntityKind::Obstacle(_) => OBSTACLE_HEIGHT,
            EntityKind::Coin => COIN_HEIGHT,
        };
        Vec3::new(self.lane.x(), y, self.z)
    }
}

/// Outbound events, drained by presentation/audio after each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A run began (fresh or restart)
    RunStarted,
    /// Jump edge accepted
    JumpStarted,
    /// Jump window closed
    JumpLanded,
    /// An obstacle spawned ahead
    ObstacleAppeared { subtype: u8 },
    /// Coin picked up
    CoinCollected { points: u32 },
    /// Score mutated
    ScoreChanged { score: u32 },
    /// Fatal collision
    GameOver,
}

/// Run-time deadlines, all compared against `GameState::clock_us`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTimers {
    pub next_obstacle_us: u64,
    pub next_coin_us: u64,
    pub next_speed_step_us: u64,
}

impl RunTimers {
    /// Deadlines for a run whose clock reads `now_us`
    pub fn starting_at(now_us: u64) -> Self {
        Self {
            next_obstacle_us: now_us + OBSTACLE_INTERVAL_US,
            next_coin_us: now_us + COIN_INTERVAL_US,
            next_speed_step_us: now_us + SPEED_STEP_INTERVAL_US,
        }
    }
}

/// Per-run counters reported at game over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub obstacles_spawned: u32,
    pub coins_spawned: u32,
    pub coins_collected: u32,
    /// Obstacles that scrolled past the player without a collision
    pub obstacles_passed: u32,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG streams were created from
    pub seed: u64,
    /// Gameplay RNG (spawn lanes and subtypes)
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Monotonic run clock (microseconds); only advances while running
    pub clock_us: u64,
    pub player: PlayerState,
    /// Edge-trigger bookkeeping for the three intents
    pub latch: IntentLatch,
    /// Active obstacles and coins in creation order
    pub entities: Vec<Entity>,
    pub score: u32,
    pub speed: f32,
    pub timers: RunTimers,
    pub stats: RunStats,
    /// Road and roadside props
    pub scenery: Scenery,
    /// Events produced since the last drain
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_rng(seed, Pcg32::seed_from_u64(seed))
    }

    /// Create a state around an externally supplied gameplay RNG
    pub fn with_rng(seed: u64, rng: Pcg32) -> Self {
        Self {
            seed,
            rng,
            phase: GamePhase::NotStarted,
            clock_us: 0,
            player: PlayerState::default(),
            latch: IntentLatch::default(),
            entities: Vec::new(),
            score: 0,
            speed: BASE_SPEED,
            timers: RunTimers::starting_at(0),
            stats: RunStats::default(),
            scenery: Scenery::new(seed),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append an entity with a fresh ID and return that ID
    pub fn push_entity(&mut self, kind: EntityKind, lane: Lane, z: f32) -> u32 {
        let id = self.next_entity_id();
        self.entities.push(Entity { id, kind, lane, z });
        id
    }

    /// Ensure entities are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.entities.sort_by_key(|e| e.id);
    }

    /// Queue an outbound event
    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Current run time in seconds
    pub fn elapsed_secs(&self) -> f32 {
        self.clock_us as f32 / 1_000_000.0
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lane_moves_clamp_at_edges() {
        assert_eq!(Lane::FAR_LEFT.left(), Lane::FAR_LEFT);
        assert_eq!(Lane::FAR_RIGHT.right(), Lane::FAR_RIGHT);
        assert_eq!(Lane::new(1).left().index(), 0);
        assert_eq!(Lane::new(2).right().index(), 3);
        assert_eq!(Lane::new(200).index(), 3);
    }

    #[test]
    fn lane_offsets_follow_table() {
        let xs: Vec<f32> = (0..LANE_COUNT).map(|i| Lane::new(i).x()).collect();
        assert_eq!(xs, vec![3.0, 1.0, -1.0, -3.0]);
    }

    #[test]
    fn render_x_approaches_lane_without_snapping() {
        let mut player = PlayerState::default();
        player.lane = Lane::new(3);
        player.smooth_toward_lane();
        // 1.0 + (-3.0 - 1.0) * 0.3
        assert!((player.render_x - -0.2).abs() < 1e-5);
        for _ in 0..60 {
            player.smooth_toward_lane();
        }
        assert!((player.render_x - -3.0).abs() < 1e-3);
    }

    #[test]
    fn jump_arc_peaks_and_lands_with_window() {
        assert_eq!(jump_height(0.0), 0.0);
        assert!((jump_height(0.25) - 2.5).abs() < 1e-4);
        assert!(jump_height(0.5).abs() < 1e-4);
        assert_eq!(jump_height(0.75), 0.0);
    }

    #[test]
    fn entity_ids_are_creation_ordered() {
        let mut state = GameState::new(7);
        let a = state.push_entity(EntityKind::Coin, Lane::new(0), 100.0);
        let b = state.push_entity(EntityKind::Obstacle(ObstacleKind::FallenLog), Lane::new(2), 100.0);
        assert!(a < b);
        assert_eq!(state.entities[1].subtype(), Some(1));
        assert_eq!(state.entities[0].subtype(), None);
        assert_eq!(state.entities[1].world_position(), Vec3::new(-1.0, 0.5, 100.0));
    }
}
