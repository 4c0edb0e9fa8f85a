use std::f32::consts::TAU;
use std::time::Duration;

use crate::config::CloudConfig;
use crate::item::Vec3;

/// Elapsed time folded into one bob period. The bob is `TAU`-periodic, so the
/// folded value yields the same offsets while keeping full f32 resolution on
/// long runs.
pub fn bob_phase(elapsed: Duration) -> f32 {
    (elapsed.as_secs_f64() % std::f64::consts::TAU) as f32
}

/// Idle motion for the cloud: a delta-driven spin of the whole group plus a
/// per-item vertical bob that is a pure function of elapsed time.
#[derive(Debug, Clone)]
pub struct Animator {
    rotation: f32,
    rate: f32,
    amplitude: f32,
    phase_step: f32,
}

impl Animator {
    pub fn new(config: &CloudConfig) -> Self {
        Self {
            rotation: 0.0,
            rate: config.rotation_rate,
            amplitude: config.bob_amplitude,
            phase_step: config.bob_phase_step,
        }
    }

    /// Group rotation about the vertical axis, radians in `[0, TAU)`.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Negative deltas are ignored so the spin never reverses. The angle is
    /// kept in one turn so small steps never round away.
    pub fn advance(&mut self, delta: f32) {
        if delta > 0.0 {
            self.rotation = (self.rotation + self.rate * delta).rem_euclid(TAU);
        }
    }

    pub fn bob(&self, elapsed: f32, index: usize) -> f32 {
        self.amplitude * (elapsed + index as f32 * self.phase_step).sin()
    }

    /// World positions for the first `min(child_count, base.len())` items.
    pub fn tick(&self, elapsed: f32, base: &[Vec3], child_count: usize) -> Vec<Vec3> {
        base.iter()
            .take(child_count)
            .enumerate()
            .map(|(i, p)| Vec3::new(p.x, p.y + self.bob(elapsed, i), p.z))
            .collect()
    }
}

/// Spinning cube shown while there are no keywords.
#[derive(Debug, Clone)]
pub struct Placeholder {
    pub half_extent: f32,
    rotation_x: f32,
    rotation_y: f32,
}

const PLACEHOLDER_RATE_X: f32 = 0.6;
const PLACEHOLDER_RATE_Y: f32 = 0.8;

/// Corner index pairs; corners are numbered by their (x, y, z) sign bits.
pub const CUBE_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (2, 3),
    (4, 5),
    (6, 7),
    (0, 2),
    (1, 3),
    (4, 6),
    (5, 7),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

impl Default for Placeholder {
    fn default() -> Self {
        Self {
            half_extent: 0.8,
            rotation_x: 0.0,
            rotation_y: 0.0,
        }
    }
}

impl Placeholder {
    pub fn advance(&mut self, delta: f32) {
        if delta > 0.0 {
            self.rotation_x = (self.rotation_x + PLACEHOLDER_RATE_X * delta).rem_euclid(TAU);
            self.rotation_y = (self.rotation_y + PLACEHOLDER_RATE_Y * delta).rem_euclid(TAU);
        }
    }

    pub fn rotation(&self) -> (f32, f32) {
        (self.rotation_x, self.rotation_y)
    }

    pub fn vertices(&self) -> [Vec3; 8] {
        let e = self.half_extent;

        std::array::from_fn(|i| {
            let sign = |bit: usize| if i & bit == 0 { -e } else { e };

            Vec3::new(sign(4), sign(2), sign(1))
                .rotate_x(self.rotation_x)
                .rotate_y(self.rotation_y)
        })
    }
}
