//! Core data models: document metadata and message records.
//!
//! A [`MessageRecord`] serializes to the shape annotation tools import
//! directly (`text` is the default text key in Label Studio):
//!
//! ```json
//! {
//!   "timestamp": "2023-01-02T15:04:00",
//!   "author": "Alice",
//!   "text": "hello world",
//!   "metadata": {
//!     "attachments": [],
//!     "embeds": [],
//!     "reactions": [],
//!     "channel": "chat",
//!     "guild": "TestGuild"
//!   }
//! }
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::parsing::ISO_TIMESTAMP_FORMAT;
use crate::parsing::sections::ExtractedFields;

/// Guild, channel and topic from the export's header banner.
///
/// Built once per document and shared by every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub guild: Option<String>,
    /// Channel name without its category prefix
    pub channel: Option<String>,
    pub topic: Option<String>,
}

impl DocumentMetadata {
    /// Returns `true` if no header banner was found.
    pub fn is_empty(&self) -> bool {
        self.guild.is_none() && self.channel.is_none() && self.topic.is_none()
    }
}

/// Per-message metadata block.
///
/// `channel` and `guild` serialize as `null` when the export has no header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMetadata {
    pub attachments: Vec<String>,
    pub embeds: Vec<String>,
    pub reactions: Vec<String>,
    pub channel: Option<String>,
    pub guild: Option<String>,
}

/// One message of the export, ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// ISO-8601 (`2023-01-02T15:04:00`) or the original literal if unparseable
    pub timestamp: String,
    /// Author text as written in the delimiter line
    pub author: String,
    /// Message text with attachment/embed/reaction sections removed
    pub text: String,
    pub metadata: RecordMetadata,
}

impl MessageRecord {
    /// Creates a record with empty sections and no channel/guild.
    pub fn new(
        timestamp: impl Into<String>,
        author: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            author: author.into(),
            text: text.into(),
            metadata: RecordMetadata::default(),
        }
    }

    /// Combines extracted fields with the shared document metadata.
    pub fn assemble(
        timestamp: impl Into<String>,
        author: impl Into<String>,
        fields: ExtractedFields,
        document: &DocumentMetadata,
    ) -> Self {
        let ExtractedFields {
            text,
            attachments,
            embeds,
            reactions,
        } = fields;

        Self {
            timestamp: timestamp.into(),
            author: author.into(),
            text,
            metadata: RecordMetadata {
                attachments,
                embeds,
                reactions,
                channel: document.channel.clone(),
                guild: document.guild.clone(),
            },
        }
    }

    /// Builder-style method to attach document metadata.
    #[must_use]
    pub fn with_document(mut self, document: &DocumentMetadata) -> Self {
        self.metadata.channel.clone_from(&document.channel);
        self.metadata.guild.clone_from(&document.guild);
        self
    }

    /// Builder-style method to add an attachment URL.
    #[must_use]
    pub fn with_attachment(mut self, url: impl Into<String>) -> Self {
        self.metadata.attachments.push(url.into());
        self
    }

    /// Builder-style method to add an embed line.
    #[must_use]
    pub fn with_embed(mut self, line: impl Into<String>) -> Self {
        self.metadata.embeds.push(line.into());
        self
    }

    /// Builder-style method to add a reaction line.
    #[must_use]
    pub fn with_reaction(mut self, reaction: impl Into<String>) -> Self {
        self.metadata.reactions.push(reaction.into());
        self
    }

    /// The timestamp as a date-time, if it was normalized to ISO-8601.
    pub fn parsed_timestamp(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.timestamp, ISO_TIMESTAMP_FORMAT).ok()
    }

    /// Returns `true` if the message has no text and no sections.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
            && self.metadata.attachments.is_empty()
            && self.metadata.embeds.is_empty()
            && self.metadata.reactions.is_empty()
    }
}
