//! The analytical engine: pure functions over a validated `TimeSeries`.
//!
//! Five components, each stateless and side-effect free:
//! - `trend` — simple moving average over closing prices
//! - `returns` — day-over-day fractional change
//! - `runs` — directional streak detection and aggregates
//! - `profit` — greedy maximum-profit extraction
//! - `records` — per-day composite record assembly
//!
//! `summary` adds headline statistics over the series and its returns.

pub mod profit;
pub mod records;
pub mod returns;
pub mod runs;
pub mod summary;
pub mod trend;

pub use profit::{max_profit, ProfitReport, Transaction};
pub use records::{assemble_records, DailyRecord, MalformedRecord, RunMembership};
pub use returns::daily_returns;
pub use runs::{analyze_runs, RunAnalysis};
pub use summary::{summarize, PriceRange, SeriesSummary};
pub use trend::{sma, TrendError};

/// Create a series from close prices for testing.
///
/// Generates plausible OHLV around each close: open = prev close (or the
/// close itself for the first day), high/low bracket open and close,
/// volume = 1000. Dates start 2023-01-01 and advance one calendar day per
/// record, matching the worked-example fixture.
#[cfg(test)]
pub fn make_series(closes: &[f64]) -> crate::domain::TimeSeries {
    use crate::domain::{OhlcvRecord, TimeSeries};
    let base_date = chrono::NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let records = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            OhlcvRecord {
                date: base_date + chrono::Duration::days(i as i64),
                open,
                high: open.max(close) + 1.0,
                low: (open.min(close) - 1.0).max(0.0),
                close,
                volume: 1000,
            }
        })
        .collect();
    TimeSeries::from_records(records).expect("test fixture must be valid")
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for analytics tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
