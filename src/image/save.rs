//! Image saving utilities.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::RgbaImage;

use crate::error::{Error, Result};

/// PNG compression settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Compression {
    /// Encoder defaults.
    #[default]
    Default,
    /// Best compression with adaptive per-row filtering. Slower, smaller files.
    Optimized,
}

impl Compression {
    const fn encoder_settings(self) -> (CompressionType, FilterType) {
        match self {
            Self::Default => (CompressionType::Default, FilterType::Adaptive),
            Self::Optimized => (CompressionType::Best, FilterType::Adaptive),
        }
    }
}

/// Save an RGBA image as PNG.
///
/// The format is always PNG regardless of the path's extension.
///
/// # Errors
///
/// Returns an error if the file cannot be created or encoding fails.
pub fn save_png<P: AsRef<Path>>(img: &RgbaImage, path: P, compression: Compression) -> Result<()> {
    let path = path.as_ref();

    let file = File::create(path).map_err(|source| Error::ImageSave {
        path: path.to_path_buf(),
        source: image::ImageError::IoError(source),
    })?;

    let (compression_type, filter) = compression.encoder_settings();
    let mut writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(&mut writer, compression_type, filter);

    img.write_with_encoder(encoder)
        .map_err(|source| Error::ImageSave {
            path: path.to_path_buf(),
            source,
        })?;

    // Small icons fit in the buffer entirely; a write error only shows up here.
    writer.flush().map_err(|source| Error::ImageSave {
        path: path.to_path_buf(),
        source: image::ImageError::IoError(source),
    })?;

    tracing::debug!(
        "Saved {} ({}x{}, {compression:?})",
        path.display(),
        img.width(),
        img.height()
    );

    Ok(())
}
