//! Random sampling for ray tracing.
//!
//! Every function draws from a caller-supplied generator. The renderer hands
//! each worker its own seeded ChaCha stream, so nothing here touches global
//! or thread-local state.

use glam::Vec3A;
use rand::Rng;
use std::f32::consts::PI;

/// Generate a random f32 in [0.0, 1.0)
pub fn random_f32<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random()
}

/// Generate a random point uniformly distributed inside the unit ball.
///
/// Closed form instead of rejection: uniform azimuth, uniform cos(polar),
/// and a cube-root radius so volume is covered evenly. Always consumes
/// exactly three samples.
pub fn random_in_unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> Vec3A {
    let theta = 2.0 * PI * random_f32(rng);
    let phi = (2.0 * random_f32(rng) - 1.0).acos();
    let r = random_f32(rng).cbrt();

    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();

    Vec3A::new(
        r * sin_phi * cos_theta,
        r * sin_phi * sin_theta,
        r * cos_phi,
    )
}

/// Generate a random point uniformly distributed inside the unit disk in the
/// xy plane (z = 0), using rejection sampling.
pub fn random_in_unit_disk<R: Rng + ?Sized>(rng: &mut R) -> Vec3A {
    loop {
        let p = Vec3A::new(
            2.0 * random_f32(rng) - 1.0,
            2.0 * random_f32(rng) - 1.0,
            0.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}
