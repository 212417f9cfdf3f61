//! Errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors from constructing, reading or writing a canvas
///
/// Drawing never fails; coordinates outside of the canvas are clipped.
#[derive(Error, Debug)]
pub enum Error {
    #[error("canvas dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("cannot allocate pixel data for a {width}x{height} canvas")]
    OutOfMemory { width: usize, height: usize },
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),
    #[error("conversion of {} to {} failed: {reason}", .src.display(), .dst.display())]
    Conversion {
        src: PathBuf,
        dst: PathBuf,
        reason: String,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
