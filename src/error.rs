//! Error type shared by the library and the command-line front end.

use thiserror::Error;

/// Errors that can occur while setting up a render or writing its output.
#[derive(Error, Debug)]
pub enum Error {
    /// Render settings that cannot produce an image.
    #[error("Invalid render configuration: {0}")]
    InvalidConfig(String),

    /// Filesystem or network failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoding or writing failed.
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    /// Worker threads could not be started.
    #[error("Failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result alias using the crate [`enum@Error`].
pub type Result<T> = std::result::Result<T, Error>;
