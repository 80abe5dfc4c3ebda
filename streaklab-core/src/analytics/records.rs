//! Per-day enriched record assembly.
//!
//! Joins the OHLCV series with the SMA, returns, and run outputs into one
//! `DailyRecord` per index. Assembly is tolerant of per-index faults: a
//! malformed day yields an `Err` for that index only and the rest proceed,
//! so callers decide whether partial results are acceptable.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Direction, Run, TimeSeries};

/// Membership of a day inside a run: which direction, how long the run is,
/// and where in it the day falls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunMembership {
    pub direction: Direction,
    pub length: usize,
    /// 1-based position of the day within its run.
    pub position: usize,
}

/// One enriched per-day record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    pub sma: Option<f64>,
    pub daily_return: Option<f64>,
    /// Close-to-close change; 0 for the first day.
    pub price_change: f64,
    /// Close-to-close change in percent; 0 when the prior close is 0.
    pub price_change_pct: f64,
    pub run_membership: Option<RunMembership>,
}

/// A single day that could not be assembled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedRecord {
    #[error("non-finite {field} price at index {index}")]
    NonFinitePrice { index: usize, field: &'static str },

    #[error("derived series '{series}' has no entry at index {index}")]
    MissingDerived { index: usize, series: &'static str },
}

/// Assemble one record per day, result-per-item, preserving input order.
///
/// A failure at one index never aborts the batch; the caller observes
/// omissions through the `Err` items.
pub fn assemble_records(
    series: &TimeSeries,
    sma: &[Option<f64>],
    returns: &[Option<f64>],
    runs: &[Run],
) -> Vec<Result<DailyRecord, MalformedRecord>> {
    series
        .records()
        .iter()
        .enumerate()
        .map(|(index, _)| assemble_one(series, sma, returns, runs, index))
        .collect()
}

fn assemble_one(
    series: &TimeSeries,
    sma: &[Option<f64>],
    returns: &[Option<f64>],
    runs: &[Run],
    index: usize,
) -> Result<DailyRecord, MalformedRecord> {
    let rec = series
        .get(index)
        .ok_or(MalformedRecord::MissingDerived { index, series: "ohlcv" })?;

    for (field, value) in [
        ("open", rec.open),
        ("high", rec.high),
        ("low", rec.low),
        ("close", rec.close),
    ] {
        if !value.is_finite() {
            return Err(MalformedRecord::NonFinitePrice { index, field });
        }
    }

    let sma_value = *sma
        .get(index)
        .ok_or(MalformedRecord::MissingDerived { index, series: "sma" })?;
    let daily_return = *returns
        .get(index)
        .ok_or(MalformedRecord::MissingDerived { index, series: "daily_returns" })?;

    let (price_change, price_change_pct) = if index == 0 {
        (0.0, 0.0)
    } else {
        let prev_close = series
            .get(index - 1)
            .ok_or(MalformedRecord::MissingDerived { index, series: "ohlcv" })?
            .close;
        if !prev_close.is_finite() {
            return Err(MalformedRecord::NonFinitePrice { index, field: "previous close" });
        }
        let change = rec.close - prev_close;
        let pct = if prev_close == 0.0 {
            0.0
        } else {
            change / prev_close * 100.0
        };
        (change, pct)
    };

    // Linear scan: run count is bounded by series length, and runs are
    // ordered, so this stays effectively linear over the whole assembly.
    let run_membership = runs.iter().find(|r| r.contains(index)).map(|r| RunMembership {
        direction: r.direction,
        length: r.length(),
        position: index - r.start_index + 1,
    });

    Ok(DailyRecord {
        date: rec.date,
        open: rec.open,
        high: rec.high,
        low: rec.low,
        close: rec.close,
        volume: rec.volume,
        sma: sma_value,
        daily_return,
        price_change,
        price_change_pct,
        run_membership,
    })
}
