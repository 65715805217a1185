//! One-time backups of icons before they are rewritten in place.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const BACKUP_SUFFIX: &str = "_backup";

/// What [`ensure_backup`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupOutcome {
    /// A new backup was written to this path.
    Created(PathBuf),
    /// A backup from an earlier run was left untouched.
    AlreadyExists(PathBuf),
}

/// Backup location for `path`: `icon16.png` becomes `icon16_backup.png`.
#[must_use]
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.file_stem().map(OsString::from).unwrap_or_default();
    name.push(BACKUP_SUFFIX);
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    path.with_file_name(name)
}

/// Copy `path` to its backup location unless a backup is already there.
///
/// An existing backup is never overwritten, so it always holds the file as it
/// was before the first conversion.
///
/// # Errors
///
/// Returns [`Error::Backup`] if the copy fails.
pub fn ensure_backup(path: &Path) -> Result<BackupOutcome> {
    let backup = backup_path(path);

    if backup.exists() {
        tracing::debug!("Backup already present: {}", backup.display());
        return Ok(BackupOutcome::AlreadyExists(backup));
    }

    fs::copy(path, &backup).map_err(|source| Error::Backup {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(BackupOutcome::Created(backup))
}
