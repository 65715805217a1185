//! Square resampling of a single image.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{Rgba, Rgba32FImage, RgbaImage};

use crate::error::{Error, Result};
use crate::image::{load_rgba, save_png, Compression};

/// Output file name for an icon of edge length `size`.
#[must_use]
pub fn output_name(size: u32) -> String {
    format!("icon{size}.png")
}

/// Resample `img` to exactly `size`x`size` with Lanczos3.
///
/// The aspect ratio is not preserved. Colour is filtered premultiplied by
/// alpha, so fully transparent pixels contribute nothing to the edges of
/// opaque regions.
#[must_use]
pub fn resize_to_square(img: &RgbaImage, size: u32) -> RgbaImage {
    let resized = imageops::resize(&premultiply(img), size, size, FilterType::Lanczos3);
    unpremultiply(&resized)
}

fn premultiply(img: &RgbaImage) -> Rgba32FImage {
    Rgba32FImage::from_fn(img.width(), img.height(), |x, y| {
        let Rgba([r, g, b, a]) = *img.get_pixel(x, y);
        let alpha = f32::from(a) / 255.0;
        let scale = |c: u8| f32::from(c) / 255.0 * alpha;
        Rgba([scale(r), scale(g), scale(b), alpha])
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unpremultiply(img: &Rgba32FImage) -> RgbaImage {
    // Safe: every value is clamped to [0, 1] before scaling to u8
    let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;

    RgbaImage::from_fn(img.width(), img.height(), |x, y| {
        let Rgba([r, g, b, a]) = *img.get_pixel(x, y);
        if to_u8(a) == 0 {
            return Rgba([0, 0, 0, 0]);
        }
        Rgba([to_u8(r / a), to_u8(g / a), to_u8(b / a), to_u8(a)])
    })
}

/// Load `source`, resize it to `size`x`size` and save an optimized PNG to `output`.
///
/// # Errors
///
/// Returns an error if `size` is zero or the image cannot be loaded or saved.
pub fn resize_icon<P: AsRef<Path>, Q: AsRef<Path>>(source: P, output: Q, size: u32) -> Result<()> {
    if size == 0 {
        return Err(Error::InvalidParameter {
            name: "size".to_string(),
            reason: "must be greater than 0".to_string(),
        });
    }

    let img = load_rgba(source)?;
    let resized = resize_to_square(&img, size);

    save_png(&resized, output, Compression::Optimized)
}
