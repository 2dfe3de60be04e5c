//! Road and roadside scenery loop
//!
//! Not gameplay-relevant: nothing here is collision-checked. Props scroll at
//! the current speed so they stay in step with the road, and recycle far
//! ahead once behind the camera. Uses its own RNG stream so scenery rolls
//! never shift gameplay spawns.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Road texture repeats every this many units
pub const ROAD_LOOP_LENGTH: f32 = 1990.0;
/// Props per side of the road
pub const PROPS_PER_SIDE: usize = 60;
pub const PROP_SPACING: f32 = 20.0;
pub const PROP_FIRST_Z: f32 = 100.0;
pub const PROP_RECYCLE_Z: f32 = -20.0;
pub const PROP_RESPAWN_Z: f32 = 1200.0;
/// Props sit between these distances from the road centre
pub const PROP_MIN_OFFSET: f32 = 10.0;
pub const PROP_MAX_OFFSET: f32 = 50.0;

pub const CLOUD_COUNT: usize = 30;
pub const CLOUD_BASE_SPEED: f32 = 5.0;
pub const CLOUD_RECYCLE_Z: f32 = -50.0;
pub const CLOUD_RESPAWN_Z: f32 = 1000.0;

/// Which side of the road a prop stands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn sign(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// A roadside tree
#[derive(Debug, Clone)]
pub struct Prop {
    pub side: Side,
    pub x: f32,
    pub z: f32,
    pub scale: f32,
}

/// A drifting cloud
#[derive(Debug, Clone)]
pub struct Cloud {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Extra speed on top of `CLOUD_BASE_SPEED`
    pub drift: f32,
}

#[derive(Debug, Clone)]
pub struct Scenery {
    /// Road scroll offset in `(-ROAD_LOOP_LENGTH, 0]`
    pub road_offset: f32,
    pub props: Vec<Prop>,
    pub clouds: Vec<Cloud>,
    /// Seconds of scenery time (drives cloud sway)
    pub elapsed: f32,
    rng: Pcg32,
}

fn prop_x(rng: &mut Pcg32, side: Side) -> f32 {
    side.sign() * rng.random_range(PROP_MIN_OFFSET..PROP_MAX_OFFSET)
}

impl Scenery {
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed ^ 0x5CE4_E000_0000_0001);

        let mut props = Vec::with_capacity(PROPS_PER_SIDE * 2);
        for i in 0..PROPS_PER_SIDE {
            let z = PROP_FIRST_Z + i as f32 * PROP_SPACING;
            for side in [Side::Right, Side::Left] {
                let x = prop_x(&mut rng, side);
                let scale = rng.random_range(0.8..1.4);
                props.push(Prop { side, x, z, scale });
            }
        }

        let clouds = (0..CLOUD_COUNT)
            .map(|i| Cloud {
                x: rng.random_range(-100.0..100.0),
                y: rng.random_range(50.0..80.0),
                z: 100.0 + i as f32 * 30.0,
                drift: rng.random_range(0.5..2.0),
            })
            .collect();

        Self {
            road_offset: 0.0,
            props,
            clouds,
            elapsed: 0.0,
            rng,
        }
    }

    /// Scroll everything one frame at the given world speed
    pub fn advance(&mut self, speed: f32, dt: f32) {
        self.elapsed += dt;

        self.road_offset -= speed * dt;
        while self.road_offset <= -ROAD_LOOP_LENGTH {
            self.road_offset += ROAD_LOOP_LENGTH;
        }

        for prop in &mut self.props {
            prop.z -= speed * dt;
            if prop.z < PROP_RECYCLE_Z {
                prop.z = PROP_RESPAWN_Z;
                prop.x = prop_x(&mut self.rng, prop.side);
            }
        }

        for (i, cloud) in self.clouds.iter_mut().enumerate() {
            cloud.z -= (CLOUD_BASE_SPEED + cloud.drift) * dt;
            cloud.x += (self.elapsed * 0.1 + i as f32).sin() * 0.05;
            if cloud.z < CLOUD_RECYCLE_Z {
                cloud.z = CLOUD_RESPAWN_Z;
                cloud.x = self.rng.random_range(-100.0..100.0);
                cloud.y = self.rng.random_range(50.0..80.0);
            }
        }
    }
}
