//! TimeSeries — the validated, chronologically ordered OHLCV sequence.
//!
//! Construction sorts the input by date and rejects empty input and
//! duplicate dates. Once built, a `TimeSeries` is immutable: every derived
//! series is a read-only computation over it, and analysis sessions share
//! it only behind `Arc`.

use chrono::NaiveDate;
use thiserror::Error;

use super::record::OhlcvRecord;

/// Errors from `TimeSeries` construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeriesError {
    #[error("time series must contain at least one record")]
    Empty,

    #[error("duplicate date in series: {0}")]
    DuplicateDate(NaiveDate),
}

/// An ordered sequence of OHLCV records, indexed 0..n-1 by position.
///
/// Invariant: records are sorted ascending by date with no duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    records: Vec<OhlcvRecord>,
}

impl TimeSeries {
    /// Build a series from unordered records.
    ///
    /// Sorts by date (stable), then rejects the input if it is empty or if
    /// two records share a date.
    pub fn from_records(mut records: Vec<OhlcvRecord>) -> Result<Self, SeriesError> {
        if records.is_empty() {
            return Err(SeriesError::Empty);
        }
        records.sort_by_key(|r| r.date);
        for pair in records.windows(2) {
            if pair[0].date == pair[1].date {
                return Err(SeriesError::DuplicateDate(pair[1].date));
            }
        }
        Ok(Self { records })
    }

    /// Number of trading days in the series. Always >= 1.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at position `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&OhlcvRecord> {
        self.records.get(index)
    }

    /// All records, in date order.
    pub fn records(&self) -> &[OhlcvRecord] {
        &self.records
    }

    /// Closing prices in date order.
    pub fn closes(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.close).collect()
    }

    /// Date of the earliest record.
    pub fn first_date(&self) -> NaiveDate {
        self.records[0].date
    }

    /// Date of the latest record.
    pub fn last_date(&self) -> NaiveDate {
        self.records[self.records.len() - 1].date
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OhlcvRecord> {
        self.records.iter()
    }
}
