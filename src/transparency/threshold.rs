//! Per-pixel brightness threshold.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::error::Result;
use crate::image::{load_rgba, save_png, Compression};

/// Replacement for background pixels: white with zero alpha.
pub const TRANSPARENT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Map one pixel through the threshold.
///
/// A pixel whose red, green and blue channels are all strictly greater than
/// `threshold` becomes [`TRANSPARENT_WHITE`]. Every other pixel is returned
/// unchanged, alpha included.
#[inline]
#[must_use]
pub fn make_transparent_pixel(pixel: Rgba<u8>, threshold: u8) -> Rgba<u8> {
    let Rgba([r, g, b, _]) = pixel;
    if r > threshold && g > threshold && b > threshold {
        TRANSPARENT_WHITE
    } else {
        pixel
    }
}

/// Apply the threshold to every pixel of `img` in place.
pub fn apply_threshold(img: &mut RgbaImage, threshold: u8) {
    for pixel in img.pixels_mut() {
        *pixel = make_transparent_pixel(*pixel, threshold);
    }
}

/// Load `input`, erase its light background and write the result to `output`.
///
/// `output` may be the same path as `input`; the image is fully decoded
/// before the file is rewritten.
///
/// # Errors
///
/// Returns an error if the image cannot be loaded or saved.
pub fn make_transparent<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    threshold: u8,
) -> Result<()> {
    let input = input.as_ref();
    let output = output.as_ref();

    let mut img = load_rgba(input)?;
    apply_threshold(&mut img, threshold);

    tracing::debug!(
        "Thresholded {} at {threshold} -> {}",
        input.display(),
        output.display()
    );

    save_png(&img, output, Compression::Default)
}
