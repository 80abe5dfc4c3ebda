//! Property tests for report-level invariants over synthetic data.

use proptest::prelude::*;
use streaklab_core::data::{generate_series, SyntheticConfig};
use streaklab_core::domain::TimeSeries;
use streaklab_runner::{dataset_hash, run_analysis, AnalysisConfig};

fn synthetic_series(days: usize, seed: u64) -> TimeSeries {
    let records = generate_series(&SyntheticConfig {
        days,
        seed,
        ..Default::default()
    });
    TimeSeries::from_records(records).expect("synthetic data is always a valid series")
}

proptest! {
    // Synthetic data generation is slow relative to unit inputs; keep the
    // case count moderate.
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every day lands in `records` or `skipped`, never both, never neither.
    #[test]
    fn records_plus_skipped_cover_every_day(
        days in 1usize..120,
        seed in 0u64..1_000,
    ) {
        let series = synthetic_series(days, seed);
        let window = 1 + seed as usize % days;
        let report = run_analysis(&series, &AnalysisConfig { sma_window: window }).unwrap();

        prop_assert_eq!(report.records.len() + report.skipped.len(), days);
        prop_assert_eq!(report.sma.values.len(), days);
        prop_assert_eq!(report.sma.dates.len(), days);
        prop_assert_eq!(report.daily_returns.values.len(), days);
        prop_assert_eq!(report.summary.total_days, days);
    }

    /// Run days plus direction-zero days tile the series behind the report.
    #[test]
    fn report_runs_tile_the_series(
        days in 2usize..120,
        seed in 0u64..1_000,
    ) {
        let series = synthetic_series(days, seed);
        let window = AnalysisConfig::default().sma_window.min(days);
        let report = run_analysis(&series, &AnalysisConfig { sma_window: window }).unwrap();

        let run_days: usize = report.runs.runs.iter().map(|r| r.length()).sum();
        let zero_days = report
            .daily_returns
            .values
            .iter()
            .skip(1)
            .filter(|r| !matches!(r, Some(v) if *v != 0.0))
            .count();
        prop_assert_eq!(run_days + zero_days, days - 1);
    }

    /// The dataset hash is stable across reruns and sensitive to content.
    #[test]
    fn hash_is_stable_and_content_sensitive(
        days in 2usize..60,
        seed in 0u64..1_000,
    ) {
        let series = synthetic_series(days, seed);
        prop_assert_eq!(dataset_hash(&series), dataset_hash(&series));

        let other = synthetic_series(days, seed.wrapping_add(1));
        prop_assert_ne!(dataset_hash(&series), dataset_hash(&other));
    }
}
