//! Building blocks for parsing Discord text exports.
//!
//! - [`header`] - guild/channel/topic banner
//! - [`lines`] - per-line classification (delimiter, marker, URL, blank, text)
//! - [`segment`] - splitting the document into per-message chunks
//! - [`sections`] - attachments/embeds/reactions and cleaned text of a chunk
//!
//! [`TextLogParser`](crate::parser::TextLogParser) wires these together; use
//! them directly when you need only one stage.

pub mod header;
pub mod lines;
pub mod sections;
pub mod segment;

pub use header::{extract_header, extract_header_with_separator};
pub use lines::{LineKind, Section, classify};
pub use sections::{ExtractedFields, extract_fields, extract_fields_with};
pub use segment::{
    EXPORT_TIMESTAMP_FORMAT, ISO_TIMESTAMP_FORMAT, RawChunk, Segments, normalize_timestamp,
    segment,
};
