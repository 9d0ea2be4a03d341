//! Scene container.
//!
//! A [`World`] owns a material arena and an insertion-ordered list of
//! primitives. Primitives refer to materials by [`MaterialId`], so one
//! material can be shared by any number of spheres.

use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::material::{Material, MaterialId};
use crate::ray::Ray;

/// Collection of objects forming a scene.
///
/// Uses linear search for intersection testing. Built once, then shared
/// read-only by every render worker.
#[derive(Default)]
pub struct World {
    materials: Vec<Material>,
    objects: Vec<Box<dyn Hittable>>,
}

impl World {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a material and return its handle.
    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: impl Hittable + 'static) {
        self.objects.push(Box::new(object));
    }

    /// Look up a material by handle.
    ///
    /// `None` if `id` was issued by a different world with more materials.
    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0)
    }

    /// Number of registered materials.
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Number of primitives in the scene.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True if the scene has no primitives.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for World {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut nearest = None;
        let mut closest_so_far = ray_t.max;

        // Each object is only tested against the closest hit found so far
        for object in &self.objects {
            if let Some(rec) = object.hit(r, ray_t.with_max(closest_so_far)) {
                closest_so_far = rec.t;
                nearest = Some(rec);
            }
        }

        nearest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Color;
    use crate::sphere::Sphere;
    use glam::Vec3A;

    fn down_the_z_axis() -> Ray {
        Ray::new(Vec3A::new(0.0, 0.0, 10.0), Vec3A::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn test_empty_world_misses() {
        let world = World::new();
        assert!(world.is_empty());
        assert!(world.hit(&down_the_z_axis(), Interval::from_epsilon(1e-4)).is_none());
    }

    #[test]
    fn test_nearest_hit_wins_regardless_of_order() {
        let mut world = World::new();
        let far_mat = world.add_material(Material::lambertian(Color::new(1.0, 0.0, 0.0)));
        let near_mat = world.add_material(Material::lambertian(Color::new(0.0, 1.0, 0.0)));

        // Overlapping spheres; the far one is inserted first
        world.add(Sphere::new(Vec3A::new(0.0, 0.0, 0.0), 1.0, far_mat));
        world.add(Sphere::new(Vec3A::new(0.0, 0.0, 1.5), 1.0, near_mat));

        let rec = world
            .hit(&down_the_z_axis(), Interval::from_epsilon(1e-4))
            .unwrap();
        assert!((rec.t - 7.5).abs() < 1e-5);
        assert_eq!(rec.material, near_mat);
        assert_eq!(world.len(), 2);
    }

    #[test]
    fn test_hit_bounded_by_interval_max() {
        let mut world = World::new();
        let mat = world.add_material(Material::lambertian(Color::ONE));
        world.add(Sphere::new(Vec3A::ZERO, 1.0, mat));

        assert!(world.hit(&down_the_z_axis(), Interval::new(1e-4, 8.0)).is_none());
        assert!(world.hit(&down_the_z_axis(), Interval::new(1e-4, 9.5)).is_some());
    }

    #[test]
    fn test_shared_material_handles() {
        let mut world = World::new();
        let gray = world.add_material(Material::lambertian(Color::splat(0.5)));
        world.add(Sphere::new(Vec3A::new(-2.0, 0.0, 0.0), 1.0, gray));
        world.add(Sphere::new(Vec3A::new(2.0, 0.0, 0.0), 1.0, gray));

        assert_eq!(world.material_count(), 1);
        assert_eq!(world.material(gray), Some(&Material::lambertian(Color::splat(0.5))));
        assert_eq!(world.material(MaterialId(1)), None);
    }
}
