//! Ray-object intersection.
//!
//! Defines the [`Hittable`] trait for geometric primitives and the
//! [`HitRecord`] they report.

use glam::Vec3A;

use crate::interval::Interval;
use crate::material::MaterialId;
use crate::ray::Ray;

/// Ray-object intersection information.
///
/// Only produced for hits whose `t` lies strictly inside the queried interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Distance along the ray to the intersection point
    pub t: f32,
    /// Point where the ray intersects the object
    pub p: Vec3A,
    /// Outward surface normal (unit vector). Not flipped toward the ray.
    pub normal: Vec3A,
    /// Material of the object at the hit point
    pub material: MaterialId,
}

/// Trait for objects that can be intersected by rays.
///
/// Must be `Sync + Send` so a scene can be shared by render workers.
pub trait Hittable: Sync + Send {
    /// Nearest intersection with `t` strictly inside `ray_t`, if any.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord>;
}
