//! Image loading utilities.

use std::path::Path;

use image::{DynamicImage, RgbaImage};

use crate::error::{Error, Result};

/// Load an image from disk as an RGBA buffer.
///
/// Sources without an alpha channel are converted with every pixel fully
/// opaque; RGBA sources are returned as-is.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded.
pub fn load_rgba<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path = path.as_ref();

    let img = image::open(path).map_err(|source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        "Loaded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    Ok(to_rgba(img))
}

/// Normalize any decoded image to 8-bit RGBA.
fn to_rgba(img: DynamicImage) -> RgbaImage {
    match img {
        DynamicImage::ImageRgba8(rgba) => rgba,
        other => other.into_rgba8(),
    }
}
