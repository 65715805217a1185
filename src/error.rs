//! Custom error types for iconkit.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the iconkit library.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to load an image file.
    #[error("failed to load image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to save an image file.
    #[error("failed to save image to {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// An icon scheduled for conversion does not exist.
    #[error("file not found: {path}")]
    MissingFile { path: PathBuf },

    /// The resize source image does not exist.
    #[error("source image not found: {path}")]
    MissingSource { path: PathBuf },

    /// Failed to create the one-time backup of an icon.
    #[error("failed to back up {path}: {source}")]
    Backup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },
}

/// Result type alias for iconkit operations.
pub type Result<T> = std::result::Result<T, Error>;
