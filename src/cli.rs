//! Command-line interface definition using clap.
//!
//! This module defines [`Args`], the argument structure of the `chatmark`
//! binary. Output formats come from [`OutputFormat`].

use clap::Parser;

use crate::config::ParserConfig;
use crate::core::filter::FilterConfig;
use crate::error::Result;
pub use crate::format::OutputFormat;

/// Default output path when `--output` is not given.
pub const DEFAULT_OUTPUT: &str = "discord_data_processed.json";

/// Parse Discord chat text exports into JSON records for annotation tools.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatmark")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatmark export.txt
    chatmark export.txt -o messages.jsonl -f jsonl
    chatmark export.txt --from alice --after 2023-01-01")]
pub struct Args {
    /// Path to the raw Discord text export
    pub input_file: String,

    /// Output file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Keep only messages from this author (case-insensitive)
    #[arg(long, value_name = "AUTHOR")]
    pub from: Option<String>,

    /// Keep only messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep only messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Collect every embed/reaction section of a message, not just the first
    #[arg(long)]
    pub all_sections: bool,

    /// Drop messages with no text and no attachments, embeds or reactions
    #[arg(long)]
    pub skip_empty: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parser configuration selected by the flags.
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new()
            .with_collect_all_sections(self.all_sections)
            .with_skip_empty(self.skip_empty)
    }

    /// Filter configuration selected by the flags.
    ///
    /// # Errors
    ///
    /// Fails if `--after` or `--before` is not a `YYYY-MM-DD` date.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut config = FilterConfig::new();
        if let Some(ref after) = self.after {
            config = config.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            config = config.with_date_to(before)?;
        }
        if let Some(ref from) = self.from {
            config = config.with_author(from.clone());
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["chatmark", "export.txt"]).unwrap();
        assert_eq!(args.input_file, "export.txt");
        assert_eq!(args.output, DEFAULT_OUTPUT);
        assert_eq!(args.format, OutputFormat::Json);
        assert!(!args.all_sections);
        assert!(!args.filter_config().unwrap().is_active());
    }

    #[test]
    fn test_short_flags() {
        let args =
            Args::try_parse_from(["chatmark", "in.txt", "-o", "out.jsonl", "-f", "jsonl"]).unwrap();
        assert_eq!(args.output, "out.jsonl");
        assert_eq!(args.format, OutputFormat::Jsonl);
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Args::try_parse_from(["chatmark", "in.txt", "--format", "csv"]).is_err());
    }

    #[test]
    fn test_requires_input() {
        assert!(Args::try_parse_from(["chatmark"]).is_err());
    }

    #[test]
    fn test_filter_and_parser_config() {
        let args = Args::try_parse_from([
            "chatmark",
            "in.txt",
            "--from",
            "Alice",
            "--after",
            "2023-01-01",
            "--all-sections",
            "--skip-empty",
        ])
        .unwrap();

        let filter = args.filter_config().unwrap();
        assert_eq!(filter.author.as_deref(), Some("Alice"));
        assert!(filter.after.is_some());
        assert!(filter.before.is_none());

        let parser = args.parser_config();
        assert!(parser.collect_all_sections);
        assert!(parser.skip_empty);
    }

    #[test]
    fn test_invalid_filter_date() {
        let args = Args::try_parse_from(["chatmark", "in.txt", "--before", "yesterday"]).unwrap();
        assert!(args.filter_config().unwrap_err().is_invalid_date());
    }
}
