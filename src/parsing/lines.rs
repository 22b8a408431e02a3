//! Line classification for Discord text exports.
//!
//! Every line of a log is exactly one of: a message delimiter
//! (`[1/2/2023 3:04 PM] Alice`), a section marker (`{Attachments}`,
//! `{Embed}`, `{Reactions}`), a URL, a blank line, or plain text. The
//! segmenter and the section extractor both work on these classes instead of
//! layering patterns over the raw text.

use std::sync::LazyLock;

use regex::Regex;

static DELIMITER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(\d+/\d+/\d+ \d+:\d+ [AP]M)\] (.+)$").expect("delimiter pattern is valid")
});

/// Auxiliary section introduced by a marker line inside a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// `{Attachments}` followed by one URL per line
    Attachments,
    /// `{Embed}` followed by embed title/description/link lines
    Embed,
    /// `{Reactions}` followed by one reaction per line
    Reactions,
}

impl Section {
    /// All sections, in the order they usually appear in exports.
    pub const ALL: [Section; 3] = [Section::Attachments, Section::Embed, Section::Reactions];

    /// The literal marker text, braces included.
    pub fn marker(self) -> &'static str {
        match self {
            Section::Attachments => "{Attachments}",
            Section::Embed => "{Embed}",
            Section::Reactions => "{Reactions}",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.marker())
    }
}

/// Classification of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `[<M>/<D>/<Y> <H>:<Min> <AM|PM>] <author>`
    Delimiter {
        /// Text between the brackets
        timestamp: &'a str,
        /// Everything after `"] "`, verbatim
        author: &'a str,
    },
    /// A section marker anywhere in the line. `lead` is the text before the
    /// marker, `rest` whatever follows it.
    Marker {
        section: Section,
        lead: &'a str,
        rest: &'a str,
    },
    /// A line starting with `https://`
    Url,
    /// Empty or whitespace-only
    Blank,
    /// Anything else
    Text,
}

/// Classifies one line (without its line terminator).
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(caps) = DELIMITER_RE.captures(line) {
        let (Some(timestamp), Some(author)) = (caps.get(1), caps.get(2)) else {
            return LineKind::Text;
        };
        return LineKind::Delimiter {
            timestamp: timestamp.as_str(),
            author: author.as_str(),
        };
    }

    if let Some((start, section)) = find_marker(line) {
        return LineKind::Marker {
            section,
            lead: &line[..start],
            rest: &line[start + section.marker().len()..],
        };
    }

    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        LineKind::Blank
    } else if trimmed.starts_with("https://") {
        LineKind::Url
    } else {
        LineKind::Text
    }
}

/// Byte offset and section of the first marker in `line`.
pub fn find_marker(line: &str) -> Option<(usize, Section)> {
    Section::ALL
        .into_iter()
        .filter_map(|section| line.find(section.marker()).map(|start| (start, section)))
        .min_by_key(|&(start, _)| start)
}

/// Returns `true` if the line starts a new message.
pub fn is_delimiter(line: &str) -> bool {
    DELIMITER_RE.is_match(line)
}
