//! Rendering and persisting result records.

use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::projection::FlatRecord;

/// Render records as a pretty-printed JSON array.
pub fn render_records(records: &[FlatRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Pretty-print records to stdout.
pub fn print_records(records: &[FlatRecord]) -> Result<()> {
    let rendered = render_records(records)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", rendered)?;
    Ok(())
}

/// Write records to `path` as a JSON array, replacing any existing file.
pub fn write_json(path: &Path, records: &[FlatRecord]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut content = render_records(records)?;
    content.push('\n');
    std::fs::write(path, content)?;

    tracing::debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
