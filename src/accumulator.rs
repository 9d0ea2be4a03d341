//! Progressive per-pixel sample accumulation.
//!
//! Samples are tone-mapped (gamma 2) before they are summed, and the sums are
//! kept in f64 so long renders do not drift. After every full pass the
//! current estimate is `sum / passes`.

use glam::{DVec3, Vec3A};
use image::{Rgb, Rgb32FImage, RgbImage};

use crate::interval::Interval;
use crate::material::Color;

/// Apply gamma correction (gamma = 2.0) per component.
#[inline]
pub fn linear_to_gamma(linear: Color) -> Color {
    linear.max(Vec3A::ZERO).to_array().map(f32::sqrt).into()
}

/// Running color sums for a `width x height` frame.
#[derive(Debug, Clone)]
pub struct FrameAccumulator {
    width: u32,
    height: u32,
    sums: Vec<DVec3>,
    passes: u32,
}

impl FrameAccumulator {
    /// Create an empty accumulator.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            sums: vec![DVec3::ZERO; width as usize * height as usize],
            passes: 0,
        }
    }

    /// Frame width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of completed passes.
    pub fn passes(&self) -> u32 {
        self.passes
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Add one linear radiance sample to pixel `(x, y)`.
    pub fn add_sample(&mut self, x: u32, y: u32, radiance: Color) {
        let i = self.index(x, y);
        self.sums[i] += linear_to_gamma(radiance).as_dvec3();
    }

    /// Add one linear radiance sample per pixel for row `y`.
    pub fn add_row(&mut self, y: u32, row: &[Color]) {
        debug_assert_eq!(row.len(), self.width as usize);
        let start = self.index(0, y);
        for (sum, &radiance) in self.sums[start..start + row.len()].iter_mut().zip(row) {
            *sum += linear_to_gamma(radiance).as_dvec3();
        }
    }

    /// Mark a full pass over the frame as done.
    pub fn finish_pass(&mut self) {
        self.passes += 1;
    }

    /// Current gamma-encoded estimate for pixel `(x, y)`.
    ///
    /// Black until the first pass completes.
    pub fn estimate(&self, x: u32, y: u32) -> DVec3 {
        self.average(self.sums[self.index(x, y)])
    }

    fn average(&self, sum: DVec3) -> DVec3 {
        if self.passes == 0 {
            DVec3::ZERO
        } else {
            sum / self.passes as f64
        }
    }

    /// Current estimate as 8-bit RGB, row 0 first.
    ///
    /// Values are scaled by 255 and truncated; anything above 1.0 saturates.
    pub fn to_rgb8(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            let c = self.estimate(x, y) * 255.0;
            Rgb([c.x as u8, c.y as u8, c.z as u8])
        })
    }

    /// Current estimate as floating-point RGB, clamped to [0, 1].
    pub fn to_rgb32f(&self) -> Rgb32FImage {
        let unit = Interval::new(0.0, 1.0);
        Rgb32FImage::from_fn(self.width, self.height, |x, y| {
            let c = self.estimate(x, y).as_vec3();
            Rgb([unit.clamp(c.x), unit.clamp(c.y), unit.clamp(c.z)])
        })
    }
}
