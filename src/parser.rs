//! Parser for Discord text-log exports.
//!
//! [`TextLogParser`] runs the whole pipeline over one document: header
//! extraction, segmentation, field extraction and record assembly.
//!
//! # Example
//!
//! ```rust
//! use chatmark::parser::TextLogParser;
//!
//! let log = "\
//! ==========
//! Guild: TestGuild
//! Channel: General / chat
//! Topic: none
//! ==========
//! [1/2/2023 3:04 PM] Alice
//! hello world
//! ";
//!
//! let parsed = TextLogParser::new().parse_str(log);
//! assert_eq!(parsed.records.len(), 1);
//! assert_eq!(parsed.records[0].timestamp, "2023-01-02T15:04:00");
//! assert_eq!(parsed.records[0].metadata.channel.as_deref(), Some("chat"));
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::ParserConfig;
use crate::core::models::{DocumentMetadata, MessageRecord};
use crate::error::{ChatmarkError, Result};
use crate::parsing::{extract_fields_with, extract_header_with_separator, segment};

/// Result of parsing one export: header metadata plus records in document
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLog {
    pub metadata: DocumentMetadata,
    pub records: Vec<MessageRecord>,
}

impl ParsedLog {
    /// Consumes the log, returning only its records.
    pub fn into_records(self) -> Vec<MessageRecord> {
        self.records
    }
}

/// Parser for Discord text exports.
#[derive(Debug, Clone, Default)]
pub struct TextLogParser {
    config: ParserConfig,
}

impl TextLogParser {
    /// Creates a parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads the whole file and parses it.
    ///
    /// # Errors
    ///
    /// Returns [`ChatmarkError::Read`] if the file is missing, unreadable,
    /// or not valid UTF-8.
    pub fn parse(&self, path: &Path) -> Result<ParsedLog> {
        let content = fs::read_to_string(path).map_err(|e| ChatmarkError::read(path, e))?;
        debug!(path = %path.display(), bytes = content.len(), "read export");
        Ok(self.parse_str(&content))
    }

    /// Parses an export already held in memory.
    ///
    /// Never fails: a missing header yields empty metadata and a document
    /// without delimiter lines yields no records.
    pub fn parse_str(&self, content: &str) -> ParsedLog {
        let metadata = extract_header_with_separator(content, &self.config.channel_separator);

        let mut records = Vec::new();
        let mut skipped = 0usize;
        for chunk in segment(content) {
            let fields = extract_fields_with(&chunk.body, &self.config);
            if self.config.skip_empty && fields.is_empty() {
                skipped += 1;
                continue;
            }
            records.push(MessageRecord::assemble(
                chunk.timestamp(),
                chunk.author,
                fields,
                &metadata,
            ));
        }

        debug!(
            records = records.len(),
            skipped,
            has_header = !metadata.is_empty(),
            "parsed export"
        );

        ParsedLog { metadata, records }
    }
}
