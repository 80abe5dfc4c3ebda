//! OhlcvRecord — the fundamental per-day market data unit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// OHLCV record for a single trading day.
///
/// Prices are non-negative reals, volume a non-negative integer. The
/// ingestion layer enforces these constraints before a record enters a
/// `TimeSeries`; records built programmatically are checked per-index
/// during record assembly instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcvRecord {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl OhlcvRecord {
    /// Returns true if any price field is NaN or infinite.
    pub fn has_non_finite_price(&self) -> bool {
        !(self.open.is_finite()
            && self.high.is_finite()
            && self.low.is_finite()
            && self.close.is_finite())
    }

    /// Basic sanity check: finite prices, non-negative, high/low envelope.
    pub fn is_sane(&self) -> bool {
        if self.has_non_finite_price() {
            return false;
        }
        self.open >= 0.0
            && self.low >= 0.0
            && self.high >= self.low
            && self.high >= self.open
            && self.high >= self.close
            && self.low <= self.open
            && self.low <= self.close
    }
}
