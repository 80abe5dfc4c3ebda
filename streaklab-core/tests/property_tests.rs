//! Property tests for the analytics invariants.
//!
//! Uses proptest to verify:
//! 1. SMA shape — output length, null warmup prefix, trailing-slice means
//! 2. Returns definition — null head, exact ratio when the prior close is non-zero
//! 3. Run partition — runs + zero-direction days tile the series exactly
//! 4. Profit identity — total equals the sum of positive day-over-day deltas
//! 5. Determinism — identical inputs produce identical outputs

use proptest::prelude::*;
use streaklab_core::analytics::{analyze_runs, daily_returns, max_profit, sma};

// ── Strategies (proptest) ────────────────────────────────────────────

/// Prices on a coarse half-point grid so ties (zero deltas) are common,
/// including occasional zero prices.
fn arb_prices() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((0u32..400).prop_map(|v| v as f64 / 2.0), 1..60)
}

/// Strictly positive prices (no zero-division edge).
fn arb_positive_prices() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((1u32..400).prop_map(|v| v as f64 / 2.0), 2..60)
}

// ── 1. SMA shape ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn sma_has_null_warmup_then_trailing_means(
        prices in arb_prices(),
        window_seed in 1usize..60,
    ) {
        let window = 1 + window_seed % prices.len();
        let result = sma(&prices, window).unwrap();

        prop_assert_eq!(result.len(), prices.len());
        for (i, value) in result.iter().enumerate() {
            if i < window - 1 {
                prop_assert_eq!(*value, None, "index {} inside warmup", i);
            } else {
                let slice = &prices[i + 1 - window..=i];
                let mean = slice.iter().sum::<f64>() / window as f64;
                let actual = value.unwrap();
                prop_assert!((actual - mean).abs() < 1e-9,
                    "index {}: {} vs {}", i, actual, mean);
            }
        }
    }

    #[test]
    fn sma_rejects_out_of_range_windows(prices in arb_prices()) {
        prop_assert!(sma(&prices, 0).is_err());
        prop_assert!(sma(&prices, prices.len() + 1).is_err());
    }
}

// ── 2. Returns definition ────────────────────────────────────────────

proptest! {
    #[test]
    fn returns_match_definition(prices in arb_positive_prices()) {
        let returns = daily_returns(&prices);
        prop_assert_eq!(returns.len(), prices.len());
        prop_assert_eq!(returns[0], None);
        for i in 1..prices.len() {
            let expected = (prices[i] - prices[i - 1]) / prices[i - 1];
            prop_assert_eq!(returns[i], Some(expected));
        }
    }

    #[test]
    fn zero_prior_close_is_null(prices in arb_prices()) {
        let returns = daily_returns(&prices);
        for i in 1..prices.len() {
            if prices[i - 1] == 0.0 {
                prop_assert_eq!(returns[i], None);
            }
        }
    }
}

// ── 3. Run partition ─────────────────────────────────────────────────

proptest! {
    /// Runs plus zero-direction days (excluding index 0) tile the series:
    /// sum of run lengths + zero days == n - 1.
    #[test]
    fn runs_partition_the_series(prices in arb_prices()) {
        let returns = daily_returns(&prices);
        let analysis = analyze_runs(&returns);
        let n = prices.len();

        let run_days: usize = analysis.runs.iter().map(|r| r.length()).sum();
        let zero_days = returns
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, r)| !matches!(r, Some(v) if *v != 0.0))
            .count();
        prop_assert_eq!(run_days + zero_days, n.saturating_sub(1));

        // Non-overlapping, ordered, never touching index 0.
        for run in &analysis.runs {
            prop_assert!(run.start_index >= 1);
            prop_assert!(run.end_index < n);
        }
        for pair in analysis.runs.windows(2) {
            prop_assert!(pair[0].end_index < pair[1].start_index);
        }

        // Every index inside a run carries that run's direction.
        for run in &analysis.runs {
            for i in run.start_index..=run.end_index {
                let signum = match returns[i] {
                    Some(r) if r > 0.0 => 1,
                    Some(r) if r < 0.0 => -1,
                    _ => 0,
                };
                prop_assert_eq!(signum, run.direction.signum(), "index {}", i);
            }
        }
    }

    /// Aggregates agree with the run list they summarize.
    #[test]
    fn run_aggregates_match_run_list(prices in arb_prices()) {
        let analysis = analyze_runs(&daily_returns(&prices));
        let up: Vec<_> = analysis
            .runs
            .iter()
            .filter(|r| r.direction.signum() == 1)
            .collect();
        let down: Vec<_> = analysis
            .runs
            .iter()
            .filter(|r| r.direction.signum() == -1)
            .collect();

        prop_assert_eq!(analysis.total_upward_runs, up.len());
        prop_assert_eq!(analysis.total_downward_runs, down.len());
        prop_assert_eq!(
            analysis.longest_upward_streak,
            up.iter().map(|r| r.length()).max().unwrap_or(0)
        );
        prop_assert_eq!(
            analysis.longest_downward_streak,
            down.iter().map(|r| r.length()).max().unwrap_or(0)
        );
        prop_assert_eq!(
            analysis.total_upward_days,
            up.iter().map(|r| r.length()).sum::<usize>()
        );
        prop_assert_eq!(
            analysis.total_downward_days,
            down.iter().map(|r| r.length()).sum::<usize>()
        );
    }
}

// ── 4. Profit identity ───────────────────────────────────────────────

proptest! {
    #[test]
    fn profit_is_sum_of_positive_deltas(prices in arb_prices()) {
        let report = max_profit(&prices);
        let expected: f64 = prices
            .windows(2)
            .map(|w| (w[1] - w[0]).max(0.0))
            .sum();
        prop_assert!((report.total_profit - expected).abs() < 1e-9);

        for tx in &report.transactions {
            prop_assert_eq!(tx.sell_index, tx.buy_index + 1);
            prop_assert!(tx.profit > 0.0);
            prop_assert_eq!(tx.buy_price, prices[tx.buy_index]);
            prop_assert_eq!(tx.sell_price, prices[tx.sell_index]);
        }
    }

    #[test]
    fn monotone_series_profit_is_endpoint_spread(
        start in 1u32..100,
        steps in prop::collection::vec(1u32..20, 1..30),
    ) {
        let mut prices = vec![start as f64];
        for step in steps {
            prices.push(prices[prices.len() - 1] + step as f64);
        }
        let report = max_profit(&prices);
        let spread = prices[prices.len() - 1] - prices[0];
        prop_assert!((report.total_profit - spread).abs() < 1e-9);
        prop_assert_eq!(report.transactions.len(), prices.len() - 1);
    }
}

// ── 5. Determinism ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn pipeline_is_deterministic(prices in arb_prices()) {
        let window = 1 + prices.len() / 2;
        let a = (
            sma(&prices, window).unwrap(),
            daily_returns(&prices),
            analyze_runs(&daily_returns(&prices)),
            max_profit(&prices),
        );
        let b = (
            sma(&prices, window).unwrap(),
            daily_returns(&prices),
            analyze_runs(&daily_returns(&prices)),
            max_profit(&prices),
        );
        prop_assert_eq!(a, b);
    }
}
