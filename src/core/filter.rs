//! Filter records by date range and author.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for filtering record collections.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Records on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Records on or before date |
//! | Author | [`with_author`](FilterConfig::with_author) | Records from a specific author |
//!
//! # Example
//!
//! ```
//! use chatmark::core::filter::{FilterConfig, apply_filters};
//! use chatmark::MessageRecord;
//!
//! # fn main() -> chatmark::Result<()> {
//! let records = vec![
//!     MessageRecord::new("2024-01-01T12:00:00", "Alice", "Old"),
//!     MessageRecord::new("2024-06-15T12:00:00", "Alice", "New"),
//!     MessageRecord::new("2024-06-16T09:00:00", "Bob", "Also new"),
//! ];
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-01")?
//!     .with_author("alice");
//!
//! let filtered = apply_filters(records, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].text, "New");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Records whose timestamp could not be normalized are **excluded** when
//!   date filters are active
//! - Author matching is case-insensitive for ASCII characters
//! - Multiple filters are combined with AND logic

use chrono::{NaiveDate, NaiveDateTime};

use crate::core::models::MessageRecord;
use crate::error::ChatmarkError;

/// Configuration for filtering records by date and author.
///
/// Export timestamps carry no timezone, so bounds are naive date-times too.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only records on or after this timestamp.
    pub after: Option<NaiveDateTime>,

    /// Include only records on or before this timestamp.
    pub before: Option<NaiveDateTime>,

    /// Include only records from this author (case-insensitive).
    pub author: Option<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all records pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive, from 00:00:00).
    ///
    /// # Errors
    ///
    /// Returns [`ChatmarkError::InvalidDate`] if `date_str` is not `YYYY-MM-DD`.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatmarkError> {
        let date = parse_date(date_str)?;
        self.after = date.and_hms_opt(0, 0, 0);
        Ok(self)
    }

    /// Sets the end date filter (inclusive, through 23:59:59).
    ///
    /// # Errors
    ///
    /// Returns [`ChatmarkError::InvalidDate`] if `date_str` is not `YYYY-MM-DD`.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatmarkError> {
        let date = parse_date(date_str)?;
        self.before = date.and_hms_opt(23, 59, 59);
        Ok(self)
    }

    /// Sets the author filter.
    ///
    /// ```
    /// use chatmark::core::filter::FilterConfig;
    ///
    /// // Matches "Alice", "alice", "ALICE"
    /// let config = FilterConfig::new().with_author("Alice");
    /// assert!(config.is_active());
    /// ```
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Sets the start timestamp directly.
    #[must_use]
    pub fn with_after(mut self, dt: NaiveDateTime) -> Self {
        self.after = Some(dt);
        self
    }

    /// Sets the end timestamp directly.
    #[must_use]
    pub fn with_before(mut self, dt: NaiveDateTime) -> Self {
        self.before = Some(dt);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.has_date_filter() || self.author.is_some()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if the record passes every active filter.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        if let Some(ref author) = self.author {
            if !record.author.eq_ignore_ascii_case(author) {
                return false;
            }
        }

        if self.has_date_filter() {
            let Some(ts) = record.parsed_timestamp() else {
                return false;
            };
            if self.after.is_some_and(|after| ts < after) {
                return false;
            }
            if self.before.is_some_and(|before| ts > before) {
                return false;
            }
        }

        true
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate, ChatmarkError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ChatmarkError::invalid_date(date_str))
}

/// Filters records, keeping document order.
///
/// If no filters are active, returns the input unchanged.
pub fn apply_filters(records: Vec<MessageRecord>, config: &FilterConfig) -> Vec<MessageRecord> {
    if !config.is_active() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| config.matches(record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<MessageRecord> {
        vec![
            MessageRecord::new("2024-01-01T10:00:00", "Alice", "new year"),
            MessageRecord::new("2024-06-15T00:00:00", "Bob", "midnight"),
            MessageRecord::new("2024-06-15T23:59:00", "alice", "late"),
            MessageRecord::new("99/99/9999 1:00 PM", "Alice", "broken clock"),
        ]
    }

    #[test]
    fn test_no_filter_passthrough() {
        let config = FilterConfig::new();
        assert!(!config.is_active());
        assert_eq!(apply_filters(sample(), &config), sample());
    }

    #[test]
    fn test_filter_by_author_case_insensitive() {
        let config = FilterConfig::new().with_author("ALICE");
        let filtered = apply_filters(sample(), &config);
        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|r| r.author.eq_ignore_ascii_case("alice")));
    }

    #[test]
    fn test_filter_by_single_day_inclusive() {
        let config = FilterConfig::new()
            .with_date_from("2024-06-15")
            .unwrap()
            .with_date_to("2024-06-15")
            .unwrap();
        let filtered = apply_filters(sample(), &config);
        let texts: Vec<_> = filtered.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["midnight", "late"]);
    }

    #[test]
    fn test_date_filter_excludes_literal_timestamps() {
        let config = FilterConfig::new().with_date_from("2000-01-01").unwrap();
        let filtered = apply_filters(sample(), &config);
        assert!(filtered.iter().all(|r| r.text != "broken clock"));
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_combined_filters() {
        let config = FilterConfig::new()
            .with_author("alice")
            .with_date_to("2024-03-01")
            .unwrap();
        let filtered = apply_filters(sample(), &config);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].text, "new year");
    }

    #[test]
    fn test_invalid_date() {
        let err = FilterConfig::new().with_date_from("15/06/2024").unwrap_err();
        assert!(err.is_invalid_date());
        assert!(FilterConfig::new().with_date_to("2024-13-01").is_err());
    }
}
