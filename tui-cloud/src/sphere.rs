use std::f32::consts::PI;

use crate::item::Vec3;

/// `π(3 − √5)`, about 2.39996 rad.
pub fn golden_angle() -> f32 {
    PI * (3.0 - 5f32.sqrt())
}

/// Deterministic golden-angle lattice of `n` points on a sphere of `radius`.
///
/// Points run from the north pole (`y = radius`) to the south pole in equal
/// steps of `y`, each turned by the golden angle from the previous one.
/// `n == 1` is placed at the origin since the lattice divides by `n - 1`.
pub fn distribute(n: usize, radius: f32) -> Vec<Vec3> {
    match n {
        0 => Vec::new(),
        1 => vec![Vec3::ORIGIN],
        _ => {
            let golden = golden_angle();
            let last = (n - 1) as f32;

            (0..n)
                .map(|i| {
                    let y = 1.0 - (i as f32 / last) * 2.0;
                    // Rounding can push 1 - y² slightly below zero at the poles.
                    let r = (1.0 - y * y).max(0.0).sqrt();
                    let theta = i as f32 * golden;

                    Vec3::new(theta.cos() * r * radius, y * radius, theta.sin() * r * radius)
                })
                .collect()
        }
    }
}
