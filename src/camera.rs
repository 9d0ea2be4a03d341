//! Thin-lens camera for primary ray generation

use glam::Vec3A;
use rand::Rng;

use crate::random;
use crate::ray::Ray;

/// User-facing camera parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    /// Point camera is looking from (camera position)
    pub lookfrom: Vec3A,
    /// Point camera is looking at (look target)
    pub lookat: Vec3A,
    /// Camera-relative "up" direction vector
    pub vup: Vec3A,
    /// Vertical field of view in degrees
    pub vfov: f32,
    /// Lens diameter. Zero gives a pinhole camera.
    pub aperture: f32,
    /// Distance from lookfrom to the plane of perfect focus
    pub focus_dist: f32,
}

impl Default for CameraSettings {
    /// The reference view: slightly above the scene, looking at the origin.
    ///
    /// `vup` points down so that image row 0 ends up at the top of the
    /// written PNG.
    fn default() -> Self {
        Self {
            lookfrom: Vec3A::new(0.0, 2.0, 3.0),
            lookat: Vec3A::ZERO,
            vup: Vec3A::new(0.0, -1.0, 0.0),
            vfov: 40.0,
            aperture: 0.0,
            focus_dist: 3.0,
        }
    }
}

/// Camera with a precomputed viewport.
///
/// Immutable after construction, so it can be shared across render workers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Camera position in world space (same as lookfrom)
    origin: Vec3A,
    /// World position of the viewport corner at (s, t) = (0, 0)
    lower_left_corner: Vec3A,
    /// Full viewport extent along u
    horizontal: Vec3A,
    /// Full viewport extent along v
    vertical: Vec3A,
    /// Camera frame basis vector pointing right (u)
    u: Vec3A,
    /// Camera frame basis vector pointing up (v)
    v: Vec3A,
    /// Camera frame basis vector pointing opposite view direction (w)
    w: Vec3A,
    lens_radius: f32,
}

impl Camera {
    /// Build the camera frame and viewport for the given aspect ratio
    /// (width / height).
    pub fn new(settings: &CameraSettings, aspect: f32) -> Self {
        let theta = settings.vfov.to_radians();
        let half_height = (theta / 2.0).tan();
        let half_width = aspect * half_height;
        let focus_dist = settings.focus_dist;

        let origin = settings.lookfrom;
        let w = (settings.lookfrom - settings.lookat).normalize();
        let u = settings.vup.cross(w).normalize();
        let v = w.cross(u);

        let lower_left_corner = origin
            - half_width * focus_dist * u
            - half_height * focus_dist * v
            - focus_dist * w;

        Self {
            origin,
            lower_left_corner,
            horizontal: 2.0 * half_width * focus_dist * u,
            vertical: 2.0 * half_height * focus_dist * v,
            u,
            v,
            w,
            lens_radius: settings.aperture / 2.0,
        }
    }

    /// Ray through normalized viewport coordinates `(s, t)` in [0, 1].
    ///
    /// With a non-zero aperture the origin is jittered across the lens disk.
    /// The returned direction is unit length.
    pub fn generate<R: Rng + ?Sized>(&self, s: f32, t: f32, rng: &mut R) -> Ray {
        let offset = if self.lens_radius > 0.0 {
            let rd = self.lens_radius * random::random_in_unit_disk(rng);
            self.u * rd.x + self.v * rd.y
        } else {
            Vec3A::ZERO
        };

        let target = self.lower_left_corner + s * self.horizontal + t * self.vertical;
        Ray::new(self.origin + offset, (target - self.origin - offset).normalize())
    }

    /// Camera position.
    pub fn origin(&self) -> Vec3A {
        self.origin
    }

    /// Unit vector the camera looks along.
    pub fn forward(&self) -> Vec3A {
        -self.w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn looking_down_negative_z(aperture: f32) -> CameraSettings {
        CameraSettings {
            lookfrom: Vec3A::ZERO,
            lookat: Vec3A::new(0.0, 0.0, -1.0),
            vup: Vec3A::Y,
            vfov: 90.0,
            aperture,
            focus_dist: 1.0,
        }
    }

    #[test]
    fn test_center_ray_points_at_lookat() {
        let settings = CameraSettings::default();
        let camera = Camera::new(&settings, 4.0 / 3.0);
        let mut rng = StdRng::seed_from_u64(0);

        let ray = camera.generate(0.5, 0.5, &mut rng);
        let expected = (settings.lookat - settings.lookfrom).normalize();
        assert_eq!(ray.origin, settings.lookfrom);
        assert!((ray.direction - expected).length() < 1e-5);
        assert!((camera.forward() - expected).length() < 1e-5);
    }

    #[test]
    fn test_viewport_corners() {
        // 90 degree fov at focus distance 1 spans [-1, 1] vertically
        let camera = Camera::new(&looking_down_negative_z(0.0), 2.0);
        let mut rng = StdRng::seed_from_u64(0);

        let lower_left = camera.generate(0.0, 0.0, &mut rng);
        let expected = Vec3A::new(-2.0, -1.0, -1.0).normalize();
        assert!((lower_left.direction - expected).length() < 1e-5);

        let upper_right = camera.generate(1.0, 1.0, &mut rng);
        let expected = Vec3A::new(2.0, 1.0, -1.0).normalize();
        assert!((upper_right.direction - expected).length() < 1e-5);
    }

    #[test]
    fn test_directions_are_normalized() {
        let camera = Camera::new(&CameraSettings::default(), 1.5);
        let mut rng = StdRng::seed_from_u64(9);
        for i in 0..=10 {
            let s = i as f32 / 10.0;
            let ray = camera.generate(s, 1.0 - s, &mut rng);
            assert!((ray.direction.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_aperture_jitters_origin_within_lens() {
        let aperture = 0.5;
        let camera = Camera::new(&looking_down_negative_z(aperture), 1.0);
        let mut rng = StdRng::seed_from_u64(5);

        let mut moved = false;
        for _ in 0..200 {
            let ray = camera.generate(0.5, 0.5, &mut rng);
            assert!(ray.origin.length() <= aperture / 2.0 + 1e-5);
            // Lens offsets stay in the (u, v) plane
            assert!(ray.origin.z.abs() < 1e-6);
            moved |= ray.origin.length() > 1e-4;

            // Every lens sample still converges on the focus plane target
            let t = -1.0 / ray.direction.z;
            assert!(ray.at(t).truncate().length() < 1e-4);
        }
        assert!(moved);
        assert_eq!(camera.origin(), Vec3A::ZERO);
    }
}
