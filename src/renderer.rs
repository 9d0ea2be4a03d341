//! Progressive CPU renderer.
//!
//! Each pass draws one jittered camera sample per pixel and folds it into a
//! [`FrameAccumulator`]. Rows within a pass are traced in parallel with
//! rayon. Every (pass, row) pair gets its own ChaCha stream derived from the
//! configured seed, so a render is reproducible for any thread count.

use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::accumulator::FrameAccumulator;
use crate::camera::{Camera, CameraSettings};
use crate::error::{Error, Result};
use crate::integrator::{Integrator, DEFAULT_MAX_DEPTH};
use crate::material::Color;
use crate::random;
use crate::scene::World;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of progressive passes (one sample per pixel each)
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Base seed for every per-row random stream
    pub seed: u64,
    /// Worker threads; 0 uses rayon's default
    pub threads: usize,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            samples_per_pixel: 8,
            max_depth: DEFAULT_MAX_DEPTH,
            seed: 0,
            threads: 0,
            show_progress: true,
        }
    }
}

impl RenderConfig {
    /// Reject configurations that cannot produce an image.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "image size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(Error::InvalidConfig(
                "samples per pixel must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Renders one scene from one camera.
pub struct Renderer<'w> {
    config: RenderConfig,
    camera: Camera,
    integrator: Integrator,
    world: &'w World,
}

impl<'w> Renderer<'w> {
    /// Validate `config` and build the camera for its aspect ratio.
    pub fn new(config: RenderConfig, camera: &CameraSettings, world: &'w World) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            camera: Camera::new(camera, config.aspect_ratio()),
            integrator: Integrator::new(config.max_depth),
            config,
            world,
        })
    }

    /// Replace the default integrator (e.g. to change the sky).
    pub fn with_integrator(mut self, integrator: Integrator) -> Self {
        self.integrator = integrator;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Camera built for this render.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Deterministic generator for row `y` of pass `pass`.
    pub fn row_rng(&self, pass: u32, y: u32) -> ChaCha8Rng {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        rng.set_stream(pass as u64 * self.config.height as u64 + y as u64);
        rng
    }

    /// One jittered linear radiance sample through pixel `(x, y)`.
    pub fn sample_pixel<R: Rng + ?Sized>(&self, x: u32, y: u32, rng: &mut R) -> Color {
        let u = (x as f32 + random::random_f32(rng)) / self.config.width as f32;
        let v = (y as f32 + random::random_f32(rng)) / self.config.height as f32;
        let ray = self.camera.generate(u, v, rng);
        self.integrator.radiance(&ray, self.world, 0, rng)
    }

    /// Linear radiance samples for every pixel in row `y` of pass `pass`.
    pub fn render_row(&self, pass: u32, y: u32) -> Vec<Color> {
        let mut rng = self.row_rng(pass, y);
        (0..self.config.width)
            .map(|x| self.sample_pixel(x, y, &mut rng))
            .collect()
    }

    /// Trace one full pass and fold it into `accumulator`.
    pub fn render_pass(&self, accumulator: &mut FrameAccumulator, progress: &ProgressBar) {
        let pass = accumulator.passes();
        let rows: Vec<Vec<Color>> = (0..self.config.height)
            .into_par_iter()
            .map(|y| {
                let row = self.render_row(pass, y);
                progress.inc(1);
                row
            })
            .collect();

        for (y, row) in rows.iter().enumerate() {
            accumulator.add_row(y as u32, row);
        }
        accumulator.finish_pass();
    }

    /// Run every pass, calling `on_pass` with the accumulator after each one.
    ///
    /// An error from `on_pass` stops the render and is returned.
    pub fn render<F>(&self, mut on_pass: F) -> Result<FrameAccumulator>
    where
        F: FnMut(&FrameAccumulator) -> Result<()>,
    {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.threads)
            .build()?;

        let mut accumulator = FrameAccumulator::new(self.config.width, self.config.height);
        let progress = self.progress_bar();

        info!(
            "Rendering {}x{} with {} passes on {} threads...",
            self.config.width,
            self.config.height,
            self.config.samples_per_pixel,
            pool.current_num_threads()
        );
        let start = Instant::now();

        for _ in 0..self.config.samples_per_pixel {
            let pass_start = Instant::now();
            pool.install(|| self.render_pass(&mut accumulator, &progress));
            debug!("Pass {} traced in {:.2?}", accumulator.passes(), pass_start.elapsed());

            on_pass(&accumulator)?;
        }

        progress.finish();
        info!("Image generated in {:.2?}", start.elapsed());

        Ok(accumulator)
    }

    fn progress_bar(&self) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }
        let total = self.config.samples_per_pixel as u64 * self.config.height as u64;
        let pb = ProgressBar::new(total);
        if let Ok(style) = ProgressStyle::default_bar().template("{bar:40} {pos}/{len} rows ETA: {eta}") {
            pb.set_style(style);
        }
        pb
    }
}
