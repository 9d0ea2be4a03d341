//! Rays used for camera sampling and bounce tracing.
//!
//! A ray is the half-line r(t) = origin + t * direction, t >= 0.

use glam::Vec3A;

/// Ray in world space.
///
/// The direction is not required to be unit length. Primary rays leave the
/// camera normalized; scattered rays keep whatever length the material gives
/// them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Vec3A,
    /// Direction of travel.
    pub direction: Vec3A,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vec3A, direction: Vec3A) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3A {
        self.origin + t * self.direction
    }
}
