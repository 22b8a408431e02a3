//! # Chatmark
//!
//! A Rust library for turning Discord text-log exports into structured
//! message records for annotation tools such as Label Studio.
//!
//! ## Overview
//!
//! A text export looks like this:
//!
//! ```text
//! ==============================================================
//! Guild: TestGuild
//! Channel: General / chat
//! Topic: none
//! ==============================================================
//!
//! [1/2/2023 3:04 PM] Alice
//! hello world
//! {Attachments}
//! https://cdn.example.com/a.png
//! {Reactions}
//! 👍 (2)
//! ```
//!
//! Each `[timestamp] author` line starts a message. Attachment, embed and
//! reaction sections are lifted into the record's `metadata` and removed
//! from its `text`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatmark::prelude::*;
//! use std::path::Path;
//!
//! fn main() -> Result<()> {
//!     let parsed = TextLogParser::new().parse(Path::new("export.txt"))?;
//!     write_to_format(&parsed.records, "out.jsonl", OutputFormat::Jsonl)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TextLogParser`](parser::TextLogParser), the full pipeline
//! - [`parsing`] - individual stages (header, line classes, segments, sections)
//! - [`core`] - records, filters, statistics and writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) selection
//! - [`config`] - [`ParserConfig`](config::ParserConfig)
//! - [`cli`] - CLI arguments (requires the `cli` feature)
//! - [`error`] - [`ChatmarkError`] and [`Result`]

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use crate::core::models::{DocumentMetadata, MessageRecord, RecordMetadata};
pub use error::{ChatmarkError, Result};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatmark::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::ParserConfig;
    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::core::models::{DocumentMetadata, MessageRecord, RecordMetadata};
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};
    pub use crate::core::processor::ExtractionStats;
    pub use crate::error::{ChatmarkError, Result};
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
    pub use crate::parser::{ParsedLog, TextLogParser};
}
