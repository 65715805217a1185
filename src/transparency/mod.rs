//! Light-background to transparency conversion.

mod backup;
mod converter;
mod threshold;

pub use backup::{backup_path, ensure_backup, BackupOutcome};
pub use converter::{Config, Converter, DEFAULT_THRESHOLD, ICON_FILES};
pub use threshold::{
    apply_threshold, make_transparent, make_transparent_pixel, TRANSPARENT_WHITE,
};
