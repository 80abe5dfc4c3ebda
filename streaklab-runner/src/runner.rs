//! Analysis runner — wires the core analytics into one report.
//!
//! `run_analysis()` is a pure function of an injected immutable snapshot
//! and a config. There is no ambient "current dataset" state anywhere in
//! the pipeline, so concurrent analyses are independent by construction:
//! each caller takes its own snapshot from the session store and the
//! report depends on nothing else.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use streaklab_core::analytics::{
    analyze_runs, assemble_records, daily_returns, max_profit, sma, summarize, DailyRecord,
    ProfitReport, RunAnalysis, SeriesSummary, TrendError,
};
use streaklab_core::domain::TimeSeries;

use crate::config::AnalysisConfig;

/// Current schema version for persisted reports.
pub const SCHEMA_VERSION: u32 = 1;

/// Errors that fail a whole analysis call.
///
/// An invalid SMA window is a caller contract violation; everything else
/// the pipeline can encounter (malformed individual days) is recovered
/// per-index and surfaced through `AnalysisReport::skipped`.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Trend(#[from] TrendError),
}

/// A derived series on the same date axis as the input.
///
/// `values` and `dates` always have equal length; definedness is conveyed
/// by `None` entries rather than by trimming the axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedSeries {
    pub dates: Vec<NaiveDate>,
    pub values: Vec<Option<f64>>,
}

/// A day dropped by per-record fault tolerance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRecord {
    pub index: usize,
    pub reason: String,
}

/// Complete result of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Schema version for forward-compatible deserialization.
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub sma_window: usize,
    pub sma: AlignedSeries,
    pub daily_returns: AlignedSeries,
    pub runs: RunAnalysis,
    pub max_profit: ProfitReport,
    pub records: Vec<DailyRecord>,
    /// Days omitted from `records`, with reasons. Empty on clean data.
    pub skipped: Vec<SkippedRecord>,
    pub summary: SeriesSummary,
    /// Content hash of the input snapshot, for reproducibility checks.
    pub dataset_hash: String,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// Run the full analysis pipeline over an immutable snapshot.
///
/// Fails only on an invalid SMA window; malformed individual days are
/// skipped and reported in the result.
pub fn run_analysis(
    series: &TimeSeries,
    config: &AnalysisConfig,
) -> Result<AnalysisReport, AnalysisError> {
    let closes = series.closes();
    let dates: Vec<NaiveDate> = series.iter().map(|r| r.date).collect();

    let sma_values = sma(&closes, config.sma_window)?;
    let returns = daily_returns(&closes);
    let runs = analyze_runs(&returns);
    let profit = max_profit(&closes);
    let summary = summarize(series, &returns);

    let mut records = Vec::with_capacity(series.len());
    let mut skipped = Vec::new();
    for (index, item) in assemble_records(series, &sma_values, &returns, &runs.runs)
        .into_iter()
        .enumerate()
    {
        match item {
            Ok(record) => records.push(record),
            Err(err) => {
                warn!(index, error = %err, "skipping malformed record");
                skipped.push(SkippedRecord {
                    index,
                    reason: err.to_string(),
                });
            }
        }
    }

    info!(
        days = series.len(),
        window = config.sma_window,
        skipped = skipped.len(),
        "analysis complete"
    );

    Ok(AnalysisReport {
        schema_version: SCHEMA_VERSION,
        sma_window: config.sma_window,
        sma: AlignedSeries {
            dates: dates.clone(),
            values: sma_values,
        },
        daily_returns: AlignedSeries {
            dates,
            values: returns,
        },
        runs,
        max_profit: profit,
        records,
        skipped,
        summary,
        dataset_hash: dataset_hash(series),
    })
}

/// Content-addressable hash of a snapshot.
///
/// Two identical series hash identically, so a persisted report can be
/// checked against the dataset that produced it.
pub fn dataset_hash(series: &TimeSeries) -> String {
    let json =
        serde_json::to_vec(series.records()).expect("OHLCV record serialization cannot fail");
    blake3::hash(&json).to_hex().to_string()
}
