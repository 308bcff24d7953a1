//! Error type
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while rendering, showing or saving the emblem.
///
/// Rendering itself is deterministic, so apart from [`Error::Canvas`] and
/// [`Error::DegenerateShape`] these are all environmental.
#[derive(Error, Debug)]
pub enum Error {
    /// Error related to IO operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error raised by the image encoder
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// The directory images are saved into does not exist
    #[error("Output directory does not exist: {}", .0.display())]
    MissingOutputDir(PathBuf),

    /// The supersampled canvas could not be allocated
    #[error("Cannot allocate a {width}x{height} canvas")]
    Canvas {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
    },

    /// A shape's outline does not form a drawable path
    #[error("Shape `{0}` has a degenerate outline")]
    DegenerateShape(&'static str),

    /// The display backend failed
    #[error("Window error: {0}")]
    Window(String),
}

/// Type alias for Result with [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
