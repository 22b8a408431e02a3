//! Summary statistics over extracted records.

use serde::Serialize;

use super::models::MessageRecord;

/// Counts reported after a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    pub messages: usize,
    pub attachments: usize,
    pub embeds: usize,
    pub reactions: usize,
    /// Records whose timestamp was kept as the original literal
    pub raw_timestamps: usize,
}

impl ExtractionStats {
    /// Tallies a slice of records.
    pub fn from_records(records: &[MessageRecord]) -> Self {
        records.iter().fold(Self::default(), |mut stats, record| {
            stats.messages += 1;
            stats.attachments += record.metadata.attachments.len();
            stats.embeds += record.metadata.embeds.len();
            stats.reactions += record.metadata.reactions.len();
            if record.parsed_timestamp().is_none() {
                stats.raw_timestamps += 1;
            }
            stats
        })
    }

    /// Percentage of records that kept their original timestamp literal.
    pub fn raw_timestamp_ratio(&self) -> f64 {
        if self.messages == 0 {
            return 0.0;
        }
        self.raw_timestamps as f64 / self.messages as f64 * 100.0
    }
}
