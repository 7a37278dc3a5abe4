//! Path and directory management.

use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};

use crate::error::Result;

/// Timestamp format of batch directory names.
pub const BATCH_DIR_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Directory for a download batch started at `started`.
pub fn batch_directory<Tz>(base_dir: &Path, started: DateTime<Tz>) -> PathBuf
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    base_dir.join(started.format(BATCH_DIR_FORMAT).to_string())
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
