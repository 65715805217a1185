//! Batch driver that converts the fixed set of icons in place.

use std::path::Path;

use crate::error::{Error, Result};
use crate::report::Summary;

use super::backup::{ensure_backup, BackupOutcome};
use super::threshold::make_transparent;

/// Default cutoff: pixels with R, G and B all above this are background.
pub const DEFAULT_THRESHOLD: u8 = 240;

/// Icons converted by default, in processing order.
pub const ICON_FILES: [&str; 3] = ["icon16.png", "icon48.png", "icon128.png"];

/// Configuration for the transparency converter.
#[derive(Debug, Clone)]
pub struct Config {
    /// Channel cutoff (0-255). Pixels with every RGB channel strictly above it are erased.
    pub threshold: u8,

    /// Icon file names, resolved against the working directory.
    pub files: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            files: ICON_FILES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file list is empty or holds an empty name.
    pub fn validate(&self) -> Result<()> {
        if self.files.is_empty() {
            return Err(Error::InvalidParameter {
                name: "files".to_string(),
                reason: "must name at least one icon".to_string(),
            });
        }

        if self.files.iter().any(String::is_empty) {
            return Err(Error::InvalidParameter {
                name: "files".to_string(),
                reason: "file names must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Converts light icon backgrounds to transparency, backing up originals first.
#[derive(Debug)]
pub struct Converter {
    config: Config,
}

impl Converter {
    /// Create a converter with the given configuration.
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

    /// Convert every configured icon found in `dir`.
    ///
    /// Missing files and per-file errors are recorded as failures; every
    /// configured file is attempted.
    pub fn run<P: AsRef<Path>>(&self, dir: P) -> Summary {
        let dir = dir.as_ref();
        let mut summary = Summary::new();

        tracing::info!(
            "Converting {} icon(s) in {} (threshold {})",
            self.config.files.len(),
            dir.display(),
            self.config.threshold
        );

        for name in &self.config.files {
            let outcome = self.convert_file(&dir.join(name));
            summary.record(name.as_str(), outcome);
        }

        tracing::info!("Conversion finished: {summary}");
        summary
    }

    /// Back up one icon, then threshold it in place.
    fn convert_file(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(Error::MissingFile {
                path: path.to_path_buf(),
            });
        }

        // The backup must exist before the original is overwritten.
        if let BackupOutcome::Created(backup) = ensure_backup(path)? {
            tracing::info!("Backed up original: {}", backup.display());
        }

        make_transparent(path, path, self.config.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    use crate::image::{load_rgba, save_png, Compression};
    use crate::transparency::TRANSPARENT_WHITE;

    const INK: Rgba<u8> = Rgba([100, 150, 200, 255]);

    /// Icon with a white border and a coloured centre.
    fn write_icon(dir: &Path, name: &str, size: u32) {
        let img = RgbaImage::from_fn(size, size, |x, y| {
            let edge = x == 0 || y == 0 || x == size - 1 || y == size - 1;
            if edge {
                Rgba([250, 250, 250, 255])
            } else {
                INK
            }
        });
        save_png(&img, dir.join(name), Compression::Default).unwrap();
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.threshold, 240);
        assert_eq!(config.files, ["icon16.png", "icon48.png", "icon128.png"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_list_rejected() {
        let config = Config {
            files: Vec::new(),
            ..Config::default()
        };

        assert!(matches!(
            Converter::new(config),
            Err(Error::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_converts_all_icons() {
        let dir = TempDir::new().unwrap();
        for (name, size) in [("icon16.png", 16), ("icon48.png", 48), ("icon128.png", 128)] {
            write_icon(dir.path(), name, size);
        }

        let summary = Converter::new(Config::default()).unwrap().run(dir.path());

        assert_eq!(summary.total(), 3);
        assert_eq!(summary.succeeded(), 3);

        let out = load_rgba(dir.path().join("icon48.png")).unwrap();
        assert_eq!(out.dimensions(), (48, 48));
        assert_eq!(*out.get_pixel(0, 0), TRANSPARENT_WHITE);
        assert_eq!(*out.get_pixel(24, 24), INK);

        for name in ["icon16_backup.png", "icon48_backup.png", "icon128_backup.png"] {
            assert!(dir.path().join(name).exists(), "{name} missing");
        }
    }

    #[test]
    fn test_missing_icon_is_non_fatal() {
        let dir = TempDir::new().unwrap();
        write_icon(dir.path(), "icon16.png", 16);
        write_icon(dir.path(), "icon128.png", 128);

        let summary = Converter::new(Config::default()).unwrap().run(dir.path());

        assert_eq!(summary.total(), 3);
        assert_eq!(summary.succeeded(), 2);
        let (name, err) = &summary.failures()[0];
        assert_eq!(name, "icon48.png");
        assert!(matches!(err, Error::MissingFile { .. }));
        assert!(!dir.path().join("icon48_backup.png").exists());

        let out = load_rgba(dir.path().join("icon128.png")).unwrap();
        assert_eq!(*out.get_pixel(0, 0), TRANSPARENT_WHITE);
    }

    #[test]
    fn test_corrupt_icon_is_non_fatal() {
        let dir = TempDir::new().unwrap();
        write_icon(dir.path(), "icon16.png", 16);
        fs::write(dir.path().join("icon48.png"), b"garbage").unwrap();
        write_icon(dir.path(), "icon128.png", 128);

        let summary = Converter::new(Config::default()).unwrap().run(dir.path());

        assert_eq!(summary.succeeded(), 2);
        assert!(matches!(
            summary.failures()[0].1,
            Error::ImageLoad { .. }
        ));
        // Untouched original is still there, alongside its backup.
        assert_eq!(fs::read(dir.path().join("icon48.png")).unwrap(), b"garbage");
        assert_eq!(
            fs::read(dir.path().join("icon48_backup.png")).unwrap(),
            b"garbage"
        );
    }

    #[test]
    fn test_second_run_keeps_first_backup() {
        let dir = TempDir::new().unwrap();
        write_icon(dir.path(), "icon16.png", 16);
        let original = fs::read(dir.path().join("icon16.png")).unwrap();

        let config = Config {
            files: vec!["icon16.png".to_string()],
            ..Config::default()
        };
        let converter = Converter::new(config).unwrap();

        converter.run(dir.path());
        let after_first = fs::read(dir.path().join("icon16.png")).unwrap();
        converter.run(dir.path());

        let backups: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains("_backup"))
            .collect();
        assert_eq!(backups.len(), 1);
        assert_eq!(
            fs::read(dir.path().join("icon16_backup.png")).unwrap(),
            original
        );

        // Second pass is a no-op on the pixels.
        let after_second = load_rgba(dir.path().join("icon16.png")).unwrap();
        assert_eq!(after_second, image::load_from_memory(&after_first).unwrap().into_rgba8());
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_backup_leaves_original_untouched() {
        let dir = TempDir::new().unwrap();
        write_icon(dir.path(), "icon16.png", 16);
        let original = fs::read(dir.path().join("icon16.png")).unwrap();

        // Backup path points into a directory that does not exist.
        std::os::unix::fs::symlink(
            dir.path().join("no-such-dir").join("x.png"),
            dir.path().join("icon16_backup.png"),
        )
        .unwrap();

        let config = Config {
            files: vec!["icon16.png".to_string()],
            ..Config::default()
        };
        let summary = Converter::new(config).unwrap().run(dir.path());

        assert_eq!(summary.succeeded(), 0);
        assert!(matches!(summary.failures()[0].1, Error::Backup { .. }));
        assert_eq!(fs::read(dir.path().join("icon16.png")).unwrap(), original);
    }

    #[test]
    fn test_custom_threshold() {
        let dir = TempDir::new().unwrap();
        let img = RgbaImage::from_pixel(4, 4, Rgba([210, 210, 210, 255]));
        save_png(&img, dir.path().join("icon16.png"), Compression::Default).unwrap();

        let config = Config {
            threshold: 200,
            files: vec!["icon16.png".to_string()],
        };
        let summary = Converter::new(config).unwrap().run(dir.path());

        assert!(summary.all_succeeded());
        let out = load_rgba(dir.path().join("icon16.png")).unwrap();
        assert!(out.pixels().all(|p| *p == TRANSPARENT_WHITE));
    }
}
