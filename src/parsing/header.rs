//! Header banner extraction.
//!
//! Discord text exports open with a banner:
//!
//! ```text
//! ==============================================================
//! Guild: Rust Community
//! Channel: Help / beginners
//! Topic: Ask anything
//! ==============================================================
//! ```
//!
//! The banner is optional. When it is missing every field is `None`.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::DEFAULT_CHANNEL_SEPARATOR;
use crate::core::models::DocumentMetadata;

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"==+\r?\nGuild: ([^\r\n]*)\r?\nChannel: ([^\r\n]*)\r?\nTopic: ([^\r\n]*)\r?\n==+",
    )
    .expect("header pattern is valid")
});

/// Extracts guild, channel and topic from the first header banner.
///
/// The channel keeps only the part after the last `" / "`, so
/// `"Text Channels / general"` becomes `"general"`.
///
/// # Example
///
/// ```rust
/// use chatmark::parsing::extract_header;
///
/// let doc = "=====\nGuild: G\nChannel: Cat / chat\nTopic: none\n=====\n";
/// let meta = extract_header(doc);
/// assert_eq!(meta.guild.as_deref(), Some("G"));
/// assert_eq!(meta.channel.as_deref(), Some("chat"));
/// ```
pub fn extract_header(content: &str) -> DocumentMetadata {
    extract_header_with_separator(content, DEFAULT_CHANNEL_SEPARATOR)
}

/// Same as [`extract_header`] with a custom category/channel separator.
pub fn extract_header_with_separator(content: &str, separator: &str) -> DocumentMetadata {
    let Some(caps) = HEADER_RE.captures(content) else {
        return DocumentMetadata::default();
    };

    let channel = &caps[2];
    let channel = if separator.is_empty() {
        channel
    } else {
        channel.rsplit(separator).next().unwrap_or(channel)
    };

    DocumentMetadata {
        guild: Some(caps[1].to_string()),
        channel: Some(channel.to_string()),
        topic: Some(caps[3].to_string()),
    }
}
