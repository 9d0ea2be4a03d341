//! Radiance estimation along a single camera path.
//!
//! The estimator follows one path at a time: intersect, scatter, repeat,
//! collecting the albedo of every bounce. A path ends when it escapes to the
//! sky (contributing the albedos applied to the sky color), is absorbed, or
//! runs out of bounces (contributing nothing).

use rand::Rng;

use crate::hittable::Hittable;
use crate::interval::Interval;
use crate::material::Color;
use crate::ray::Ray;
use crate::scene::World;

/// Default bounce limit.
pub const DEFAULT_MAX_DEPTH: u32 = 16;

/// Minimum hit distance for secondary rays, guarding against self-intersection.
pub const SELF_INTERSECTION_EPSILON: f32 = 1e-4;

/// Vertical gradient seen by rays that leave the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyGradient {
    /// Color for rays pointing straight down.
    pub horizon: Color,
    /// Color for rays pointing straight up.
    pub zenith: Color,
}

impl Default for SkyGradient {
    fn default() -> Self {
        Self {
            horizon: Color::ONE,
            zenith: Color::splat(0.1),
        }
    }
}

impl SkyGradient {
    /// Blend between horizon and zenith by the normalized direction's y.
    pub fn color(&self, r: &Ray) -> Color {
        let unit_direction = r.direction.normalize();
        let a = 0.5 * (unit_direction.y + 1.0);
        (1.0 - a) * self.horizon + a * self.zenith
    }

    /// Largest component either endpoint can contribute.
    pub fn max_component(&self) -> f32 {
        self.horizon.max(self.zenith).max_element()
    }
}

/// Path-tracing radiance estimator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integrator {
    /// Number of scatter events allowed before a path is terminated.
    pub max_depth: u32,
    /// Lower bound of every intersection query.
    pub epsilon: f32,
    /// Light arriving from outside the scene.
    pub background: SkyGradient,
}

impl Default for Integrator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl Integrator {
    /// Estimator with the given bounce limit and the default sky.
    pub fn new(max_depth: u32) -> Self {
        Self {
            max_depth,
            epsilon: SELF_INTERSECTION_EPSILON,
            background: SkyGradient::default(),
        }
    }

    /// Estimate radiance arriving along `ray`, which has already bounced
    /// `depth` times.
    ///
    /// Hitting a surface once `depth` reaches `max_depth` returns black, so
    /// `max_depth == 0` renders only directly visible sky. A hit on a
    /// material the world does not know is treated as absorption.
    ///
    /// Attenuations are folded innermost first, giving the same product
    /// order as `albedo * radiance(scattered, depth + 1)`.
    pub fn radiance<R: Rng + ?Sized>(&self, ray: &Ray, world: &World, depth: u32, rng: &mut R) -> Color {
        let mut attenuations: Vec<Color> = Vec::new();
        let mut ray = *ray;
        let mut depth = depth;

        loop {
            let Some(rec) = world.hit(&ray, Interval::from_epsilon(self.epsilon)) else {
                let sky = self.background.color(&ray);
                return attenuations.iter().rev().fold(sky, |color, &a| a * color);
            };

            if depth >= self.max_depth {
                return Color::ZERO;
            }

            let scattered = world
                .material(rec.material)
                .and_then(|material| material.scatter(&ray, &rec, rng));
            match scattered {
                Some((attenuation, scattered)) => {
                    attenuations.push(attenuation);
                    ray = scattered;
                    depth += 1;
                }
                None => return Color::ZERO,
            }
        }
    }
}
