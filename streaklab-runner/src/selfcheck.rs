//! Built-in self-check — runs the canonical fixture through the full
//! pipeline and compares against hand-computed expectations.
//!
//! This is the runtime counterpart of the test suite: it lets an operator
//! verify a deployed binary end to end without any input data.

use chrono::NaiveDate;
use serde::Serialize;

use streaklab_core::domain::{OhlcvRecord, TimeSeries};

use crate::config::AnalysisConfig;
use crate::runner::run_analysis;

/// One named check with its expectation and observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckCase {
    pub name: &'static str,
    pub expected: String,
    pub actual: String,
    pub passed: bool,
}

/// Outcome of a self-check run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfcheckReport {
    pub cases: Vec<CheckCase>,
    pub passed: usize,
    pub total: usize,
}

impl SelfcheckReport {
    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

/// The canonical 10-day fixture with known analytical results.
pub fn fixture_series() -> TimeSeries {
    let opens = [100.0, 102.0, 101.0, 103.0, 105.0, 104.0, 106.0, 108.0, 107.0, 109.0];
    let highs = [101.0, 103.0, 102.0, 104.0, 106.0, 105.0, 107.0, 109.0, 108.0, 110.0];
    let lows = [99.0, 101.0, 100.0, 102.0, 104.0, 103.0, 105.0, 107.0, 106.0, 108.0];
    let closes = [100.0, 102.0, 101.0, 103.0, 105.0, 104.0, 106.0, 108.0, 107.0, 109.0];
    let volumes = [1000u64, 1100, 1050, 1150, 1200, 1180, 1250, 1300, 1280, 1350];

    let base_date = NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid literal date");
    let records = (0..10)
        .map(|i| OhlcvRecord {
            date: base_date + chrono::Duration::days(i as i64),
            open: opens[i],
            high: highs[i],
            low: lows[i],
            close: closes[i],
            volume: volumes[i],
        })
        .collect();
    TimeSeries::from_records(records).expect("fixture is a valid series")
}

fn check(name: &'static str, expected: impl ToString, actual: impl ToString) -> CheckCase {
    let expected = expected.to_string();
    let actual = actual.to_string();
    let passed = expected == actual;
    CheckCase {
        name,
        expected,
        actual,
        passed,
    }
}

fn check_approx(name: &'static str, expected: f64, actual: Option<f64>) -> CheckCase {
    let passed = actual.is_some_and(|a| (a - expected).abs() < 1e-10);
    CheckCase {
        name,
        expected: format!("{expected}"),
        actual: actual.map(|a| format!("{a}")).unwrap_or_else(|| "null".into()),
        passed,
    }
}

/// Run every fixture check through the full pipeline.
pub fn run_selfcheck() -> SelfcheckReport {
    let series = fixture_series();
    let mut cases = Vec::new();

    match run_analysis(&series, &AnalysisConfig { sma_window: 3 }) {
        Ok(report) => {
            cases.push(check_approx(
                "SMA(3) at index 2",
                101.0,
                report.sma.values[2],
            ));
            cases.push(check_approx(
                "SMA(3) at index 9",
                108.0,
                report.sma.values[9],
            ));
            cases.push(check_approx(
                "daily return at index 1",
                0.02,
                report.daily_returns.values[1],
            ));
            cases.push(check_approx(
                "daily return at index 2",
                -0.009803921568627451,
                report.daily_returns.values[2],
            ));
            cases.push(check_approx(
                "maximum profit",
                12.0,
                Some(report.max_profit.total_profit),
            ));
            cases.push(check(
                "transaction count",
                6,
                report.max_profit.transactions.len(),
            ));
            cases.push(check(
                "upward run count",
                4,
                report.runs.total_upward_runs,
            ));
            cases.push(check(
                "downward run count",
                3,
                report.runs.total_downward_runs,
            ));
            cases.push(check(
                "assembled record count",
                10,
                report.records.len(),
            ));
            cases.push(check("skipped record count", 0, report.skipped.len()));
        }
        Err(err) => {
            cases.push(CheckCase {
                name: "pipeline runs on the fixture",
                expected: "ok".into(),
                actual: err.to_string(),
                passed: false,
            });
        }
    }

    let passed = cases.iter().filter(|c| c.passed).count();
    let total = cases.len();
    SelfcheckReport {
        cases,
        passed,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_is_ten_sorted_days() {
        let series = fixture_series();
        assert_eq!(series.len(), 10);
        assert_eq!(series.first_date(), "2023-01-01".parse().unwrap());
        assert_eq!(series.last_date(), "2023-01-10".parse().unwrap());
    }

    #[test]
    fn selfcheck_passes() {
        let report = run_selfcheck();
        assert!(
            report.all_passed(),
            "failing cases: {:?}",
            report.cases.iter().filter(|c| !c.passed).collect::<Vec<_>>()
        );
        assert_eq!(report.total, 10);
    }
}
