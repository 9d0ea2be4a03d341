//! Sphere primitive for ray tracing.

use glam::Vec3A;

use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::material::MaterialId;
use crate::ray::Ray;

/// Sphere primitive defined by center, radius, and material handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vec3A,

    /// Radius of the sphere (always non-negative).
    ///
    /// Negative radius values are clamped to 0.0 in the constructor.
    pub radius: f32,

    /// Material the sphere is shaded with.
    pub material: MaterialId,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Negative radius values are clamped to 0.0.
    pub fn new(center: Vec3A, radius: f32, material: MaterialId) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let oc = r.origin - self.center;

        // Half-b form of the quadratic
        let a = r.direction.length_squared();
        let b = oc.dot(r.direction);
        let c = oc.length_squared() - self.radius * self.radius;

        // Zero-length directions and point spheres would divide by zero below
        if a <= 0.0 || self.radius <= 0.0 {
            return None;
        }

        // Tangent rays (discriminant == 0) count as misses
        let discriminant = b * b - a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Near root first so the front face wins over the back face
        let root = [(-b - sqrtd) / a, (-b + sqrtd) / a]
            .into_iter()
            .find(|&t| ray_t.surrounds(t))?;

        let p = r.at(root);
        Some(HitRecord {
            t: root,
            p,
            normal: (p - self.center) / self.radius,
            material: self.material,
        })
    }
}
