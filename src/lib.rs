//! zerhacken path tracer
//!
//! A progressive Monte Carlo path tracer for scenes of diffuse spheres.
//! Each pass traces one jittered sample per pixel and refines a running
//! average that can be written out after every pass.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod accumulator;
pub mod camera;
pub mod error;
pub mod hittable;
pub mod integrator;
pub mod interval;
pub mod material;
pub mod output;
pub mod random;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod scenes;
pub mod sphere;

pub use error::{Error, Result};
