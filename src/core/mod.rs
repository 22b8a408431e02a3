//! Core processing logic for chatmark.
//!
//! This module contains:
//! - [`models`] - Document metadata and message records
//! - [`filter`] - Record filtering by date and author
//! - [`processor`] - Extraction statistics
//! - [`output`] - Format writers (JSON, JSONL)

pub mod filter;
pub mod models;
pub mod output;
pub mod processor;

// Re-export main types for convenience
pub use filter::{FilterConfig, apply_filters};
pub use models::{DocumentMetadata, MessageRecord, RecordMetadata};
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
pub use processor::ExtractionStats;
