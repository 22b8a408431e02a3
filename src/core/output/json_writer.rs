//! JSON array output writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::models::MessageRecord;
use crate::error::{ChatmarkError, Result};

/// Writes records to a file as a pretty-printed JSON array.
///
/// Any existing file is truncated. Indentation is two spaces:
/// ```json
/// [
///   {
///     "timestamp": "2023-01-02T15:04:00",
///     "author": "Alice",
///     ...
///   }
/// ]
/// ```
pub fn write_json(records: &[MessageRecord], output_path: impl AsRef<Path>) -> Result<()> {
    let path = output_path.as_ref();
    let json = to_json(records)?;

    let file = File::create(path).map_err(|e| ChatmarkError::write(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(json.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| ChatmarkError::write(path, e))?;
    Ok(())
}

/// Converts records to a pretty-printed JSON array string.
///
/// Same format as [`write_json`], but returns a String instead of writing to
/// a file.
pub fn to_json(records: &[MessageRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
