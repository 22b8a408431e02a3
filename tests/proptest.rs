//! Property-based tests for chatmark.
//!
//! These tests generate random exports to find edge cases.

use proptest::prelude::*;

use chatmark::core::output::{to_json, to_jsonl};
use chatmark::core::{FilterConfig, apply_filters};
use chatmark::parser::TextLogParser;
use chatmark::MessageRecord;

/// A single message block as it appears in an export.
fn arb_block() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["Alice", "Bob", "Crab Person 🦀", "Иван", "user_42"]),
        1u32..=12,
        1u32..=28,
        2015i32..=2025,
        1u32..=12,
        0u32..60,
        prop::bool::ANY,
        prop::sample::select(vec![
            "",
            "hello",
            "multi\nline text",
            "https://example.com/inline",
            "   padded   ",
            "Привет мир",
            "look {Attachments}",
            "see {Embed} Title",
            "hi {Reactions} 👍 (1)",
            "a {Embed} b {Attachments} https://cdn.example.com/inline.png",
        ]),
        prop::option::of(prop::collection::vec("https://cdn\\.example\\.com/[a-z]{1,8}\\.png", 1..3)),
        prop::option::of(prop::sample::select(vec!["Title\nhttps://link", "just a title"])),
        prop::option::of(prop::sample::select(vec!["👍 (1)", "🎉 (3)\n❤️ (2)"])),
    )
        .prop_map(
            |(author, month, day, year, hour, minute, pm, text, attachments, embed, reactions)| {
                let mut block = format!(
                    "[{month}/{day}/{year} {hour}:{minute:02} {}] {author}\n",
                    if pm { "PM" } else { "AM" }
                );
                if !text.is_empty() {
                    block.push_str(text);
                    block.push('\n');
                }
                if let Some(urls) = attachments {
                    block.push_str("{Attachments}\n");
                    for url in urls {
                        block.push_str(&url);
                        block.push('\n');
                    }
                    block.push('\n');
                }
                if let Some(embed) = embed {
                    block.push_str("{Embed}\n");
                    block.push_str(embed);
                    block.push('\n');
                }
                if let Some(reactions) = reactions {
                    block.push_str("{Reactions}\n");
                    block.push_str(reactions);
                    block.push('\n');
                }
                block
            },
        )
}

fn arb_export(max_blocks: usize) -> impl Strategy<Value = (usize, String)> {
    (
        prop::bool::ANY,
        prop::collection::vec(arb_block(), 0..max_blocks),
    )
        .prop_map(|(with_header, blocks)| {
            let mut export = String::new();
            if with_header {
                export.push_str("==========\nGuild: G\nChannel: Text / general\nTopic: t\n==========\n\n");
            }
            for block in &blocks {
                export.push_str(block);
                export.push('\n');
            }
            (blocks.len(), export)
        })
}

fn parse(content: &str) -> Vec<MessageRecord> {
    TextLogParser::new().parse_str(content).into_records()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // PARSE PROPERTIES
    // ============================================

    /// One record per delimiter line
    #[test]
    fn record_count_matches_blocks((blocks, export) in arb_export(15)) {
        prop_assert_eq!(parse(&export).len(), blocks);
    }

    /// Section markers never leak into text
    #[test]
    fn markers_absent_from_text((_, export) in arb_export(15)) {
        for record in parse(&export) {
            prop_assert!(!record.text.contains("{Attachments}"), "text contains {{Attachments}} marker");
            prop_assert!(!record.text.contains("{Embed}"), "text contains {{Embed}} marker");
            prop_assert!(!record.text.contains("{Reactions}"), "text contains {{Reactions}} marker");
        }
    }

    /// Text is always trimmed
    #[test]
    fn text_is_trimmed((_, export) in arb_export(15)) {
        for record in parse(&export) {
            prop_assert_eq!(record.text.trim(), record.text.as_str());
        }
    }

    /// Attachment URLs never remain in the text
    #[test]
    fn attachments_removed_from_text((_, export) in arb_export(15)) {
        for record in parse(&export) {
            for url in &record.metadata.attachments {
                prop_assert!(url.starts_with("https://"));
                prop_assert!(!record.text.contains(url.as_str()));
            }
        }
    }

    /// Valid export timestamps always normalize
    #[test]
    fn timestamps_normalized((_, export) in arb_export(10)) {
        for record in parse(&export) {
            prop_assert!(record.parsed_timestamp().is_some(), "raw: {}", record.timestamp);
        }
    }

    /// CRLF line endings parse the same as LF
    #[test]
    fn crlf_equivalent((_, export) in arb_export(10)) {
        let crlf = export.replace('\n', "\r\n");
        prop_assert_eq!(parse(&crlf), parse(&export));
    }

    /// Parsing never panics on arbitrary input
    #[test]
    fn parse_never_panics(content in "\\PC{0,400}") {
        let _ = parse(&content);
    }

    // ============================================
    // OUTPUT PROPERTIES
    // ============================================

    /// JSON output deserializes back to the same records
    #[test]
    fn json_roundtrip((_, export) in arb_export(10)) {
        let records = parse(&export);
        let json = to_json(&records).unwrap();
        let back: Vec<MessageRecord> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, records);
    }

    /// JSONL has one line per record
    #[test]
    fn jsonl_line_count((blocks, export) in arb_export(10)) {
        let jsonl = to_jsonl(&parse(&export)).unwrap();
        prop_assert_eq!(jsonl.lines().count(), blocks);
    }

    // ============================================
    // FILTER PROPERTIES
    // ============================================

    /// No filter means passthrough
    #[test]
    fn no_filter_is_passthrough((_, export) in arb_export(10)) {
        let records = parse(&export);
        let filtered = apply_filters(records.clone(), &FilterConfig::new());
        prop_assert_eq!(filtered, records);
    }

    /// Author filter only keeps matching authors
    #[test]
    fn author_filter_only_keeps_matching((_, export) in arb_export(10)) {
        let config = FilterConfig::new().with_author("alice");
        for record in apply_filters(parse(&export), &config) {
            prop_assert!(record.author.eq_ignore_ascii_case("alice"));
        }
    }
}
