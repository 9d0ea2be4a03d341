use clap::Parser;
use log::{debug, error, info};

mod cli;
mod logger;

use cli::{Args, SceneKind};
use logger::init_logger;
use zerhacken::camera::CameraSettings;
use zerhacken::output::{save_png, TevPreview};
use zerhacken::renderer::{RenderConfig, Renderer};
use zerhacken::scene::World;
use zerhacken::{scenes, Result};

fn build_world(kind: SceneKind) -> World {
    match kind {
        SceneKind::Demo => scenes::demo_world(),
        SceneKind::Ground => scenes::ground_world(),
    }
}

fn run(args: &Args) -> Result<()> {
    let config = RenderConfig {
        width: args.width,
        height: args.height,
        samples_per_pixel: args.samples_per_pixel,
        max_depth: args.max_depth,
        seed: args.seed,
        threads: args.threads,
        show_progress: !args.quiet,
    };
    let camera = CameraSettings {
        vfov: args.fov,
        aperture: args.aperture,
        focus_dist: args.focus_dist,
        ..CameraSettings::default()
    };

    let world = build_world(args.scene);
    info!(
        "Scene {:?}: {} spheres, {} materials",
        args.scene,
        world.len(),
        world.material_count()
    );
    let renderer = Renderer::new(config, &camera, &world)?;
    info!(
        "Camera at {} looking along {}, fov {}°, aperture {}",
        renderer.camera().origin(),
        renderer.camera().forward(),
        camera.vfov,
        camera.aperture
    );

    let mut tev = (args.tev || args.tev_address.is_some()).then(|| {
        let address = args.tev_address.as_deref().unwrap_or("localhost");
        TevPreview::connect(address)
    });

    let accumulator = renderer.render(|acc| {
        if let Some(preview) = tev.as_mut() {
            preview.update(&acc.to_rgb32f());
        }
        if !args.final_only {
            save_png(&acc.to_rgb8(), &args.output)?;
        }
        Ok(())
    })?;

    if args.final_only {
        save_png(&accumulator.to_rgb8(), &args.output)?;
    }
    info!(
        "Image saved as {} after {} passes",
        args.output.display(),
        accumulator.passes()
    );

    let center = accumulator.estimate(args.width / 2, args.height / 2);
    debug!("Center pixel estimate: {}", center);

    Ok(())
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    info!("zerhacken - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));
    info!(
        "Image resolution: {}x{}, samples per pixel: {}, max depth: {}",
        args.width, args.height, args.samples_per_pixel, args.max_depth
    );

    if let Err(e) = run(&args) {
        error!("Render failed: {}", e);
        std::process::exit(1);
    }
}
