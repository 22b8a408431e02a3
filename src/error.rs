//! Unified error types for chatmark.
//!
//! This module provides a single [`ChatmarkError`] enum that covers every
//! fatal condition in the library. Irregular input (missing header banner,
//! unparseable timestamps, malformed sections) is never an error: the parser
//! degrades to pass-through or omission instead. Only I/O against the input
//! and output files, serialization, and bad user-supplied options fail.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A specialized [`Result`] type for chatmark operations.
///
/// # Example
///
/// ```rust
/// use chatmark::error::Result;
/// use chatmark::MessageRecord;
///
/// fn load() -> Result<Vec<MessageRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatmarkError>;

/// The error type for all chatmark operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatmarkError {
    /// An I/O error occurred without a known path.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input export could not be read.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - The file is not valid UTF-8
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// Path of the input file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The output file could not be created or written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// Path of the output file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The requested output format is not recognized.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What was being selected (e.g. "output")
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Invalid date format in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatmarkError {
    /// Creates a read error for the given input path.
    pub fn read(path: impl AsRef<Path>, source: io::Error) -> Self {
        ChatmarkError::Read {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a write error for the given output path.
    pub fn write(path: impl AsRef<Path>, source: io::Error) -> Self {
        ChatmarkError::Write {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatmarkError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatmarkError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Returns `true` if this is any kind of I/O error.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            ChatmarkError::Io(_) | ChatmarkError::Read { .. } | ChatmarkError::Write { .. }
        )
    }

    /// Returns `true` if the input file could not be read.
    pub fn is_read(&self) -> bool {
        matches!(self, ChatmarkError::Read { .. })
    }

    /// Returns `true` if the output file could not be written.
    pub fn is_write(&self) -> bool {
        matches!(self, ChatmarkError::Write { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatmarkError::InvalidDate { .. })
    }
}
