//! JSON export functionality.
//!
//! Writes a single compact array of `{"id", "name", "email"}` objects.

use std::io::Write;

use crate::error_handling::ExportError;
use crate::storage::UserRecord;

/// Writes `records` as a JSON array to `out`.
pub fn write_json<W: Write>(records: &[UserRecord], mut out: W) -> Result<(), ExportError> {
    serde_json::to_writer(&mut out, records)?;
    out.flush()?;
    Ok(())
}
