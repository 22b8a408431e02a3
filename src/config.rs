//! Configuration types for the text-log parser.
//!
//! This module provides a plain configuration struct for library usage,
//! without any CLI framework dependencies.
//!
//! # Example
//!
//! ```rust
//! use chatmark::config::ParserConfig;
//! use chatmark::parser::TextLogParser;
//!
//! let config = ParserConfig::new()
//!     .with_collect_all_sections(true)
//!     .with_skip_empty(true);
//!
//! let parser = TextLogParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// Separator between category and channel name in the header banner.
pub const DEFAULT_CHANNEL_SEPARATOR: &str = " / ";

/// Configuration for parsing Discord text-log exports.
///
/// The defaults reproduce the canonical extraction: only the first embed and
/// reaction section of each message is kept, every message is emitted, and
/// the channel name drops its `Category / ` prefix.
///
/// # Example
///
/// ```rust
/// use chatmark::config::ParserConfig;
///
/// let config = ParserConfig::new().with_channel_separator(" > ");
/// assert_eq!(config.channel_separator, " > ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Token splitting `Category / Channel` in the header (default: `" / "`)
    pub channel_separator: String,

    /// Append every `{Embed}` / `{Reactions}` section of a message instead of
    /// only the first one (default: false)
    pub collect_all_sections: bool,

    /// Drop messages with no text, attachments, embeds or reactions
    /// (default: false)
    pub skip_empty: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            channel_separator: DEFAULT_CHANNEL_SEPARATOR.to_string(),
            collect_all_sections: false,
            skip_empty: false,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the category/channel separator used by the header extractor.
    #[must_use]
    pub fn with_channel_separator(mut self, separator: impl Into<String>) -> Self {
        self.channel_separator = separator.into();
        self
    }

    /// Sets whether repeated embed/reaction sections are collected.
    #[must_use]
    pub fn with_collect_all_sections(mut self, enabled: bool) -> Self {
        self.collect_all_sections = enabled;
        self
    }

    /// Sets whether empty messages are skipped.
    #[must_use]
    pub fn with_skip_empty(mut self, skip: bool) -> Self {
        self.skip_empty = skip;
        self
    }
}
