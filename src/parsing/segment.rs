//! Message segmentation.
//!
//! Splits a document into raw chunks, one per `[timestamp] author` line.
//! A chunk runs up to the next delimiter or the end of the document. Lines
//! before the first delimiter (the header banner) belong to no chunk.

use std::iter::Peekable;
use std::str::Lines;

use chrono::NaiveDateTime;
use tracing::debug;

use super::lines::{LineKind, classify, is_delimiter};

/// Timestamp layout used inside delimiter brackets.
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%m/%d/%Y %I:%M %p";

/// Layout of normalized timestamps in output records.
pub const ISO_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// The raw text belonging to one message, borrowed from the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawChunk<'a> {
    /// Bracketed timestamp text, e.g. `1/2/2023 3:04 PM`
    pub timestamp_literal: &'a str,
    /// Author text after the bracket, verbatim
    pub author: &'a str,
    /// Lines after the delimiter, up to the next message
    pub body: Vec<&'a str>,
}

impl RawChunk<'_> {
    /// Timestamp as ISO-8601, or the literal when it doesn't parse.
    pub fn timestamp(&self) -> String {
        normalize_timestamp(self.timestamp_literal)
    }
}

/// Lazy iterator over the message chunks of a document.
///
/// Created by [`segment`].
pub struct Segments<'a> {
    lines: Peekable<Lines<'a>>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = RawChunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        #[allow(clippy::while_let_on_iterator)]
        while let Some(line) = self.lines.next() {
            let LineKind::Delimiter { timestamp, author } = classify(line) else {
                continue;
            };

            let mut body = Vec::new();
            while let Some(next) = self.lines.next_if(|l| !is_delimiter(l)) {
                body.push(next);
            }

            return Some(RawChunk {
                timestamp_literal: timestamp,
                author,
                body,
            });
        }
        None
    }
}

/// Splits `content` into message chunks.
///
/// # Example
///
/// ```rust
/// use chatmark::parsing::segment;
///
/// let doc = "[1/2/2023 3:04 PM] Alice\nhello\n[1/2/2023 3:05 PM] Bob\nhi";
/// let chunks: Vec<_> = segment(doc).collect();
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(chunks[1].author, "Bob");
/// assert_eq!(chunks[1].body, vec!["hi"]);
/// ```
pub fn segment(content: &str) -> Segments<'_> {
    Segments {
        lines: content.lines().peekable(),
    }
}

/// Converts `M/D/YYYY H:MM AM` into `YYYY-MM-DDTHH:MM:SS`.
///
/// Literals that don't parse (e.g. `99/99/9999 1:00 PM`) come back unchanged.
/// The year must have exactly four digits; `1/2/23 3:04 PM` is kept as is.
pub fn normalize_timestamp(literal: &str) -> String {
    if !has_four_digit_year(literal) {
        debug!(timestamp = literal, "keeping timestamp without four-digit year verbatim");
        return literal.to_string();
    }

    match NaiveDateTime::parse_from_str(literal.trim(), EXPORT_TIMESTAMP_FORMAT) {
        Ok(dt) => dt.format(ISO_TIMESTAMP_FORMAT).to_string(),
        Err(err) => {
            debug!(timestamp = literal, error = %err, "keeping unparseable timestamp verbatim");
            literal.to_string()
        }
    }
}

fn has_four_digit_year(literal: &str) -> bool {
    literal
        .trim()
        .split_once(' ')
        .and_then(|(date, _)| date.rsplit('/').next())
        .is_some_and(|year| year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()))
}
