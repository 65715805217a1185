//! Batch driver that renders the fixed icon sizes.

use std::path::Path;

use crate::error::{Error, Result};
use crate::report::Summary;

use super::square::{output_name, resize_icon};

/// Source image the icons are generated from.
pub const SOURCE_IMAGE: &str = "source-icon.png";

/// Edge lengths generated by default, in processing order.
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

/// Configuration for the icon resizer.
#[derive(Debug, Clone)]
pub struct Config {
    /// Source image file name, resolved against the working directory.
    pub source: String,

    /// Square edge lengths to generate.
    pub sizes: Vec<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SOURCE_IMAGE.to_string(),
            sizes: ICON_SIZES.to_vec(),
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no sizes or any size is zero.
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(Error::InvalidParameter {
                name: "sizes".to_string(),
                reason: "must list at least one size".to_string(),
            });
        }

        if self.sizes.contains(&0) {
            return Err(Error::InvalidParameter {
                name: "sizes".to_string(),
                reason: "sizes must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

/// Generates square icons of every configured size from one source image.
#[derive(Debug)]
pub struct Resizer {
    config: Config,
}

impl Resizer {
    /// Create a resizer with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Generate every configured size from the source image in `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingSource`] if the source image does not exist, in
    /// which case no size is attempted. Failures of individual sizes are
    /// recorded in the returned summary instead.
    pub fn run<P: AsRef<Path>>(&self, dir: P) -> Result<Summary> {
        let dir = dir.as_ref();
        let source = dir.join(&self.config.source);

        if !source.exists() {
            return Err(Error::MissingSource { path: source });
        }

        tracing::info!(
            "Generating {} icon size(s) from {}",
            self.config.sizes.len(),
            source.display()
        );

        let mut summary = Summary::new();
        for &size in &self.config.sizes {
            let name = output_name(size);
            let outcome = resize_icon(&source, dir.join(&name), size);
            summary.record(format!("{name} ({size}x{size})"), outcome);
        }

        tracing::info!("Resizing finished: {summary}");
        Ok(summary)
    }
}
