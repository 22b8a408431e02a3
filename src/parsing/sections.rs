//! Field extraction from a message body.
//!
//! Walks the classified lines of one chunk and routes them into the text,
//! attachments, embeds or reactions of the message:
//!
//! | Section | Content lines | Ends at |
//! |---------|---------------|---------|
//! | `{Attachments}` | `https://` lines | blank line, plain text, next marker |
//! | `{Embed}` | every non-blank line | next marker, end of message |
//! | `{Reactions}` | every non-blank line | next marker, end of message |
//!
//! Only the first embed and the first reactions section are collected unless
//! [`ParserConfig::collect_all_sections`] is set; later ones are removed from
//! the text and dropped. Attachment sections always accumulate.

use tracing::debug;

use super::lines::{LineKind, Section, classify, find_marker};
use crate::config::ParserConfig;

/// Text and sections pulled out of a single message body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    /// Body with every section removed, blank lines dropped, trimmed
    pub text: String,
    /// Attachment URLs, in document order
    pub attachments: Vec<String>,
    /// Embed lines, in document order
    pub embeds: Vec<String>,
    /// Reaction lines, in document order
    pub reactions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Body,
    Collecting(Section),
    Dropping,
}

/// Extracts fields with the default configuration.
///
/// # Example
///
/// ```rust
/// use chatmark::parsing::extract_fields;
///
/// let body = ["look at this", "{Attachments}", "https://cdn.example.com/cat.png"];
/// let fields = extract_fields(&body);
/// assert_eq!(fields.text, "look at this");
/// assert_eq!(fields.attachments, vec!["https://cdn.example.com/cat.png"]);
/// ```
pub fn extract_fields(body: &[&str]) -> ExtractedFields {
    extract_fields_with(body, &ParserConfig::default())
}

/// Extracts text, attachments, embeds and reactions from a message body.
///
/// Markers are recognized anywhere in a line: text before a marker is routed
/// like a line of its own, and text after it is inline section content.
pub fn extract_fields_with(body: &[&str], config: &ParserConfig) -> ExtractedFields {
    let mut extractor = Extractor::new(config);
    for &line in body {
        extractor.feed(line);
    }
    extractor.finish()
}

struct Extractor<'a, 'c> {
    config: &'c ParserConfig,
    fields: ExtractedFields,
    text_lines: Vec<&'a str>,
    seen_embed: bool,
    seen_reactions: bool,
    state: State,
}

impl<'a, 'c> Extractor<'a, 'c> {
    fn new(config: &'c ParserConfig) -> Self {
        Self {
            config,
            fields: ExtractedFields::default(),
            text_lines: Vec::new(),
            seen_embed: false,
            seen_reactions: false,
            state: State::Body,
        }
    }

    fn feed(&mut self, line: &'a str) {
        let LineKind::Marker {
            mut section,
            lead,
            mut rest,
        } = classify(line)
        else {
            self.route(line);
            return;
        };

        if !lead.trim().is_empty() {
            self.route(lead.trim_end());
        }

        loop {
            self.enter(section);

            // Content written on the marker line itself, up to the next marker.
            let next = find_marker(rest);
            let inline = next.map_or(rest, |(start, _)| &rest[..start]).trim();
            if !inline.is_empty() {
                if let State::Collecting(section) = self.state {
                    self.fields.push_inline(section, inline);
                }
            }

            let Some((start, next_section)) = next else {
                break;
            };
            rest = &rest[start + next_section.marker().len()..];
            section = next_section;
        }
    }

    fn enter(&mut self, section: Section) {
        let seen = match section {
            Section::Attachments => false,
            Section::Embed => std::mem::replace(&mut self.seen_embed, true),
            Section::Reactions => std::mem::replace(&mut self.seen_reactions, true),
        };
        self.state = if seen && !self.config.collect_all_sections {
            debug!(section = %section, "dropping repeated section");
            State::Dropping
        } else {
            State::Collecting(section)
        };
    }

    /// Routes a line that holds no marker.
    fn route(&mut self, line: &'a str) {
        match (classify(line), self.state) {
            (LineKind::Blank, State::Collecting(Section::Attachments)) => self.state = State::Body,
            (LineKind::Blank, _) | (_, State::Dropping) => {}
            (_, State::Body) => self.text_lines.push(line),
            (LineKind::Url, State::Collecting(Section::Attachments)) => {
                self.fields.attachments.push(line.trim().to_string());
            }
            (_, State::Collecting(Section::Attachments)) => {
                self.state = State::Body;
                self.text_lines.push(line);
            }
            (_, State::Collecting(Section::Embed)) => {
                self.fields.embeds.push(line.trim().to_string());
            }
            (_, State::Collecting(Section::Reactions)) => {
                self.fields.reactions.push(line.trim().to_string());
            }
        }
    }

    fn finish(mut self) -> ExtractedFields {
        self.fields.text = self.text_lines.join("\n").trim().to_string();
        self.fields
    }
}

impl ExtractedFields {
    /// Returns `true` if nothing at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
            && self.attachments.is_empty()
            && self.embeds.is_empty()
            && self.reactions.is_empty()
    }

    fn push_inline(&mut self, section: Section, value: &str) {
        match section {
            Section::Attachments => {
                if value.starts_with("https://") {
                    self.attachments.push(value.to_string());
                }
            }
            Section::Embed => self.embeds.push(value.to_string()),
            Section::Reactions => self.reactions.push(value.to_string()),
        }
    }
}
