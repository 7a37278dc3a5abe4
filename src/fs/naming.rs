//! File naming for downloaded videos.

use crate::error::{Error, Result};

/// Extension of downloaded video files.
pub const VIDEO_EXTENSION: &str = "mp4";

/// Validate and sanitize a filename built from remote data.
///
/// Path traversal, separators and null bytes are rejected outright; other
/// characters that are invalid on common filesystems become `_`.
pub fn sanitize_filename(name: &str) -> Result<String> {
    let rejected = if name.contains("..") {
        Some("path traversal")
    } else if name.contains(['/', '\\']) {
        Some("path separator")
    } else if name.contains('\0') {
        Some("null byte")
    } else {
        None
    };
    if let Some(reason) = rejected {
        return Err(Error::InvalidFilename(format!("{} in '{}'", reason, name)));
    }

    let sanitized: String = name
        .chars()
        .map(|c| match c {
            ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Filename cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}

/// File name of a downloaded video: `<id>.mp4`.
pub fn video_filename(id: &str) -> Result<String> {
    let id = id.trim();
    if id.is_empty() {
        return Err(Error::InvalidFilename("Video ID is empty".to_string()));
    }
    sanitize_filename(&format!("{}.{}", id, VIDEO_EXTENSION))
}
