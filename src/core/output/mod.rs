//! Output format writers.
//!
//! - [`write_json`] / [`to_json`] - pretty JSON array of records
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one compact record per line
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> chatmark::Result<()> {
//! use chatmark::core::output::{to_jsonl, write_json};
//! use chatmark::MessageRecord;
//!
//! let records = vec![MessageRecord::new("2023-01-02T15:04:00", "Alice", "hello")];
//!
//! write_json(&records, "discord_data_processed.json")?;
//! let lines = to_jsonl(&records)?;
//! # Ok(())
//! # }
//! ```

mod json_writer;
mod jsonl_writer;

pub use json_writer::{to_json, write_json};
pub use jsonl_writer::{to_jsonl, write_jsonl};
