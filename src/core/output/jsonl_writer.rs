//! JSON Lines (JSONL) output writer.
//!
//! One compact JSON object per line, no enclosing array. Convenient for
//! line-oriented tooling and for importing large exports in batches.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::models::MessageRecord;
use crate::error::{ChatmarkError, Result};

/// Writes records in JSONL format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"timestamp":"2023-01-02T15:04:00","author":"Alice","text":"hello","metadata":{...}}
/// {"timestamp":"2023-01-02T15:05:00","author":"Bob","text":"hi","metadata":{...}}
/// ```
pub fn write_jsonl(records: &[MessageRecord], output_path: impl AsRef<Path>) -> Result<()> {
    let path = output_path.as_ref();
    let file = File::create(path).map_err(|e| ChatmarkError::write(path, e))?;
    let mut writer = BufWriter::new(file);

    for record in records {
        serde_json::to_writer(&mut writer, record).map_err(|e| {
            if e.is_io() {
                ChatmarkError::write(path, e.into())
            } else {
                ChatmarkError::Json(e)
            }
        })?;
        writer
            .write_all(b"\n")
            .map_err(|e| ChatmarkError::write(path, e))?;
    }

    writer.flush().map_err(|e| ChatmarkError::write(path, e))?;
    Ok(())
}

/// Converts records to a JSONL string.
///
/// Same format as [`write_jsonl`]; every line, including the last, ends with
/// `\n`. No records yield an empty string.
pub fn to_jsonl(records: &[MessageRecord]) -> Result<String> {
    let mut output = String::new();
    for record in records {
        output.push_str(&serde_json::to_string(record)?);
        output.push('\n');
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader};
    use tempfile::NamedTempFile;

    fn records() -> Vec<MessageRecord> {
        vec![
            MessageRecord::new("2023-01-02T15:04:00", "Alice", "line one\nline two"),
            MessageRecord::new("2023-01-02T15:05:00", "Bob", "hi").with_attachment("https://a/b.png"),
            MessageRecord::new("2023-01-02T15:06:00", "Carol", "bye"),
        ]
    }

    #[test]
    fn test_write_jsonl_one_object_per_line() {
        let temp_file = NamedTempFile::new().unwrap();
        write_jsonl(&records(), temp_file.path()).unwrap();

        let file = std::fs::File::open(temp_file.path()).unwrap();
        let lines: Vec<String> = BufReader::new(file).lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines.len(), 3);

        let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(first["author"], "Alice");
        assert_eq!(first["text"], "line one\nline two");

        let second: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(second["metadata"]["attachments"][0], "https://a/b.png");
    }

    #[test]
    fn test_jsonl_no_array_brackets() {
        let jsonl = to_jsonl(&records()[..1]).unwrap();
        assert!(jsonl.starts_with('{'));
        assert!(jsonl.ends_with("}\n"));
        assert_eq!(jsonl.lines().count(), 1);
    }

    #[test]
    fn test_to_jsonl_empty() {
        assert_eq!(to_jsonl(&[]).unwrap(), "");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_write_jsonl_device_full_is_write_error() {
        let many: Vec<MessageRecord> = (0..500)
            .map(|i| MessageRecord::new("2023-01-02T15:04:00", "Alice", format!("message {i}")))
            .collect();

        let err = write_jsonl(&many, "/dev/full").unwrap_err();
        assert!(err.is_write(), "unexpected error: {err}");
        assert!(err.to_string().contains("/dev/full"));
    }

    #[test]
    fn test_write_jsonl_matches_to_jsonl() {
        let temp_file = NamedTempFile::new().unwrap();
        write_jsonl(&records(), temp_file.path()).unwrap();
        let written = std::fs::read_to_string(temp_file.path()).unwrap();
        assert_eq!(written, to_jsonl(&records()).unwrap());
    }
}
