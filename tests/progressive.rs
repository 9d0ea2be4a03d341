//! Progressive accumulation: convergence and reproducibility.

use glam::Vec3A;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use zerhacken::accumulator::linear_to_gamma;
use zerhacken::camera::CameraSettings;
use zerhacken::renderer::{RenderConfig, Renderer};
use zerhacken::scenes;

fn quiet(config: RenderConfig) -> RenderConfig {
    RenderConfig {
        show_progress: false,
        ..config
    }
}

/// Standard deviation across independent renders of one pixel's running average.
fn spread_after(renderer: &Renderer, samples: u32, renders: u64) -> f64 {
    let estimates: Vec<f64> = (0..renders)
        .map(|seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let sum: f64 = (0..samples)
                .map(|_| linear_to_gamma(renderer.sample_pixel(400, 300, &mut rng)).x as f64)
                .sum();
            sum / samples as f64
        })
        .collect();

    let mean = estimates.iter().sum::<f64>() / estimates.len() as f64;
    let variance = estimates.iter().map(|e| (e - mean).powi(2)).sum::<f64>() / (estimates.len() - 1) as f64;
    variance.sqrt()
}

#[test]
fn noise_shrinks_with_sample_count() {
    let world = scenes::ground_world();
    let renderer = Renderer::new(quiet(RenderConfig::default()), &CameraSettings::default(), &world).unwrap();

    let renders = 64;
    let sd1 = spread_after(&renderer, 1, renders);
    let sd4 = spread_after(&renderer, 4, renders);
    let sd16 = spread_after(&renderer, 16, renders);

    assert!(sd1 > 0.0);
    assert!(sd4 < sd1, "sd4 {sd4} should be below sd1 {sd1}");
    assert!(sd16 < sd4, "sd16 {sd16} should be below sd4 {sd4}");

    // Expect roughly 1/sqrt(16) = 0.25
    let ratio = sd16 / sd1;
    assert!((0.12..0.45).contains(&ratio), "sd16 / sd1 = {ratio}");
}

#[test]
fn render_is_independent_of_thread_count() {
    let world = scenes::demo_world();
    let base = quiet(RenderConfig {
        width: 32,
        height: 24,
        samples_per_pixel: 3,
        seed: 99,
        ..RenderConfig::default()
    });

    let single = Renderer::new(RenderConfig { threads: 1, ..base.clone() }, &CameraSettings::default(), &world)
        .unwrap()
        .render(|_| Ok(()))
        .unwrap();
    let multi = Renderer::new(RenderConfig { threads: 4, ..base }, &CameraSettings::default(), &world)
        .unwrap()
        .render(|_| Ok(()))
        .unwrap();

    assert_eq!(single.to_rgb8(), multi.to_rgb8());
}

#[test]
fn different_seeds_give_different_noise() {
    let world = scenes::demo_world();
    let render = |seed| {
        let config = quiet(RenderConfig {
            width: 24,
            height: 18,
            samples_per_pixel: 1,
            seed,
            ..RenderConfig::default()
        });
        Renderer::new(config, &CameraSettings::default(), &world)
            .unwrap()
            .render(|_| Ok(()))
            .unwrap()
            .to_rgb8()
    };

    assert_eq!(render(5), render(5));
    assert_ne!(render(5), render(6));
}

#[test]
fn every_pass_yields_a_viewable_image() {
    let world = scenes::demo_world();
    let config = quiet(RenderConfig {
        width: 20,
        height: 15,
        samples_per_pixel: 4,
        ..RenderConfig::default()
    });
    let renderer = Renderer::new(config, &CameraSettings::default(), &world).unwrap();

    let mut frames = Vec::new();
    renderer
        .render(|acc| {
            frames.push(acc.to_rgb8());
            Ok(())
        })
        .unwrap();

    assert_eq!(frames.len(), 4);
    for frame in &frames {
        assert_eq!(frame.dimensions(), (20, 15));
        // The sky-facing white sphere and ground are never black
        assert!(frame.pixels().any(|p| p[0] > 0));
    }
}

/// Level camera at the ground's height, so the upper half of the view sees
/// sky and the lower half sees ground. With no bounces the ground is black.
fn horizon_frame(vup: Vec3A) -> image::RgbImage {
    let world = scenes::ground_world();
    let config = quiet(RenderConfig {
        width: 16,
        height: 12,
        samples_per_pixel: 1,
        max_depth: 0,
        ..RenderConfig::default()
    });
    let camera = CameraSettings {
        lookfrom: Vec3A::new(0.0, 0.0, 3.0),
        lookat: Vec3A::ZERO,
        vup,
        vfov: 90.0,
        aperture: 0.0,
        focus_dist: 3.0,
    };
    Renderer::new(config, &camera, &world)
        .unwrap()
        .render(|_| Ok(()))
        .unwrap()
        .to_rgb8()
}

#[test]
fn downward_up_vector_puts_sky_in_row_zero() {
    let frame = horizon_frame(Vec3A::new(0.0, -1.0, 0.0));
    let bottom = frame.height() - 1;

    for x in 0..frame.width() {
        assert!(frame.get_pixel(x, 0)[0] > 0, "row 0 should be sky at x = {x}");
        assert_eq!(frame.get_pixel(x, bottom)[0], 0, "last row should be ground at x = {x}");
    }
}

#[test]
fn upward_up_vector_flips_the_frame() {
    let frame = horizon_frame(Vec3A::Y);
    let bottom = frame.height() - 1;

    for x in 0..frame.width() {
        assert_eq!(frame.get_pixel(x, 0)[0], 0, "row 0 should be ground at x = {x}");
        assert!(frame.get_pixel(x, bottom)[0] > 0, "last row should be sky at x = {x}");
    }
}
