//! Output format selection.
//!
//! [`OutputFormat`] is a plain library type; the CLI derives its
//! `--format` values from it when the `cli` feature is enabled.
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> chatmark::Result<()> {
//! use chatmark::format::{OutputFormat, write_to_format};
//! use chatmark::MessageRecord;
//!
//! let records = vec![MessageRecord::new("2023-01-02T15:04:00", "Alice", "hello")];
//!
//! write_to_format(&records, "out.json", OutputFormat::Json)?;
//!
//! let format = OutputFormat::from_path("out.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::models::MessageRecord;
use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};
use crate::error::{ChatmarkError, Result};

/// Output format for extracted records.
///
/// - [`Json`](OutputFormat::Json) - one pretty-printed array (default)
/// - [`Jsonl`](OutputFormat::Jsonl) - one compact object per line
///
/// ```rust
/// use chatmark::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("jsonl").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON array of records
    #[default]
    Json,

    /// JSON Lines - one JSON object per line
    #[cfg_attr(feature = "cli", value(alias = "ndjson"))]
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "jsonl", "ndjson"]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Json => "application/json",
            OutputFormat::Jsonl => "application/x-ndjson",
        }
    }

    /// Detects format from a file path based on extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(ChatmarkError::invalid_format(
                "output",
                format!("Unknown file extension: '.{}'. Expected one of: json, jsonl", ext),
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes records to a file in the specified format.
pub fn write_to_format(
    records: &[MessageRecord],
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(records, path),
        OutputFormat::Jsonl => write_jsonl(records, path),
    }
}

/// Converts records to a string in the specified format.
pub fn to_format_string(records: &[MessageRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(records),
        OutputFormat::Jsonl => to_jsonl(records),
    }
}
