//! # chatmark CLI
//!
//! Command-line interface for the chatmark library.

use std::path::Path;
use std::process;

use clap::Parser as ClapParser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use chatmark::ChatmarkError;
use chatmark::cli::Args;
use chatmark::core::{ExtractionStats, apply_filters};
use chatmark::format::write_to_format;
use chatmark::parser::TextLogParser;

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatmarkError> {
    let args = <Args as ClapParser>::parse();
    let filter_config = args.filter_config()?;

    let parser = TextLogParser::with_config(args.parser_config());
    let parsed = parser.parse(Path::new(&args.input_file))?;
    let extracted = parsed.records.len();

    let records = if filter_config.is_active() {
        let filtered = apply_filters(parsed.records, &filter_config);
        debug!(before = extracted, after = filtered.len(), "applied filters");
        filtered
    } else {
        parsed.records
    };

    if !args.quiet {
        println!("Extracted {} messages from Discord data", extracted);
        if filter_config.is_active() {
            println!("Kept {} messages after filtering", records.len());
        }
    }

    write_to_format(&records, &args.output, args.format)?;

    let stats = ExtractionStats::from_records(&records);
    let raw_timestamp_pct = stats.raw_timestamp_ratio();
    debug!(?stats, raw_timestamp_pct, format = %args.format, "wrote output");
    if stats.raw_timestamps > 0 {
        warn!(
            count = stats.raw_timestamps,
            percent = raw_timestamp_pct,
            "timestamps kept verbatim because they could not be normalized"
        );
    }
    if !args.quiet {
        println!("Saved processed data to {}", args.output);
    }

    Ok(())
}

/// Logs go to stderr; `CHATMARK_LOG` takes an `EnvFilter` directive
/// (e.g. `debug`, `chatmark=trace`).
fn init_logging() {
    let filter = EnvFilter::try_from_env("CHATMARK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
