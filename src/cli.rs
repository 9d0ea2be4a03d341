use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use zerhacken::integrator::DEFAULT_MAX_DEPTH;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Built-in scenes selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneKind {
    /// Ground plus four colored spheres
    Demo,
    /// Ground only
    Ground,
}

/// Command line arguments structure using clap derive macros
#[derive(Debug, Parser)]
#[command(name = "zerhacken")]
#[command(about = "A progressive Monte Carlo path tracer for diffuse spheres")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, value_enum, default_value = "info")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Number of progressive passes (one sample per pixel each)
    #[arg(long, short = 's', default_value_t = 8)]
    pub samples_per_pixel: u32,

    /// Maximum number of bounces per path
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: u32,

    /// Seed for the per-row random streams
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Worker threads (0 = one per core)
    #[arg(long, short = 'j', default_value_t = 0)]
    pub threads: usize,

    /// Scene to render
    #[arg(long, value_enum, default_value = "demo")]
    pub scene: SceneKind,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 40.0)]
    pub fov: f32,

    /// Lens diameter (0 = pinhole)
    #[arg(long, default_value_t = 0.0)]
    pub aperture: f32,

    /// Distance to the plane of perfect focus
    #[arg(long, default_value_t = 3.0)]
    pub focus_dist: f32,

    /// Output PNG path, rewritten after every pass
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Only write the PNG once all passes are done
    #[arg(long)]
    pub final_only: bool,

    /// Hide the progress bar
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Send each pass to TEV for real-time visualization
    #[arg(long)]
    pub tev: bool,

    /// TEV client IP address and port (automatically enables --tev)
    #[arg(long)]
    pub tev_address: Option<String>,
}
