//! Surface materials.
//!
//! Materials live in the [`World`](crate::scene::World) material arena and are
//! referenced from primitives by [`MaterialId`]. Only diffuse surfaces exist
//! today; new kinds are added as enum variants.

use glam::Vec3A;
use rand::Rng;

use crate::hittable::HitRecord;
use crate::random;
use crate::ray::Ray;

/// Linear RGB color.
pub type Color = Vec3A;

/// Handle to a material stored in a [`World`](crate::scene::World).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(pub(crate) usize);

/// Material kinds understood by the integrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Lambertian diffuse material for matte surfaces.
    Lambertian {
        /// Surface reflectance, applied multiplicatively per bounce.
        albedo: Color,
    },
}

impl Material {
    /// Diffuse material with the given albedo.
    pub fn lambertian(albedo: Color) -> Self {
        Material::Lambertian { albedo }
    }

    /// Compute ray scattering for this material.
    ///
    /// Returns the attenuation and the scattered ray, or `None` when the
    /// ray is absorbed.
    pub fn scatter<R: Rng + ?Sized>(
        &self,
        _r_in: &Ray,
        rec: &HitRecord,
        rng: &mut R,
    ) -> Option<(Color, Ray)> {
        match self {
            Material::Lambertian { albedo } => Some(scatter_lambertian(*albedo, rec, rng)),
        }
    }
}

/// Diffuse bounce toward a random point in the unit ball centred one unit
/// above the surface along the normal.
fn scatter_lambertian<R: Rng + ?Sized>(albedo: Color, rec: &HitRecord, rng: &mut R) -> (Color, Ray) {
    let target = rec.p + rec.normal + random::random_in_unit_sphere(rng);
    (albedo, Ray::new(rec.p, target - rec.p))
}
