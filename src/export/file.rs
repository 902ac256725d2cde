//! Export to a file on disk.
//!
//! The chosen format is rendered into a temporary file next to the target
//! and then renamed over it. A reader of `target_path` therefore sees either
//! the previous contents (or nothing) or the complete new export, never a
//! partially written file. On failure the temporary file is removed when its
//! handle is dropped.

use std::io::Write;
use std::path::Path;

use log::{debug, info};

use crate::error_handling::ExportError;
use crate::storage::UserRecord;

use super::csv::write_csv;
use super::json::write_json;
use super::pdf::write_pdf;
use super::types::ExportFormat;

/// Renders `records` in `format` into any writer.
pub fn write_export<W: Write>(
    records: &[UserRecord],
    format: ExportFormat,
    out: W,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Csv => write_csv(records, out),
        ExportFormat::Json => write_json(records, out),
        ExportFormat::Pdf => write_pdf(records, out),
    }
}

/// Exports `records` to `target_path` in `format`, replacing any existing file.
///
/// # Errors
///
/// Returns an [`ExportError`] if the temporary file cannot be created or
/// written, if rendering fails, or if the finished file cannot be moved into
/// place. In every error case nothing is left at `target_path` that was not
/// there before.
pub fn export(
    records: &[UserRecord],
    target_path: &Path,
    format: ExportFormat,
) -> Result<(), ExportError> {
    let dir = match target_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(".export-")
        .suffix(".part")
        .tempfile_in(dir)?;
    debug!(
        "Rendering {} {} record(s) into {}",
        records.len(),
        format,
        tmp.path().display()
    );

    write_export(records, format, tmp.as_file_mut())?;
    tmp.as_file().sync_all()?;
    tmp.persist(target_path)?;

    info!(
        "Exported {} record(s) as {} to {}",
        records.len(),
        format,
        target_path.display()
    );
    Ok(())
}
