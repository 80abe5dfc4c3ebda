//! Synthetic OHLCV generation — seeded random walk for demos and tests.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::OhlcvRecord;

/// Parameters for the synthetic random walk.
#[derive(Debug, Clone)]
pub struct SyntheticConfig {
    pub days: usize,
    pub start_date: NaiveDate,
    pub start_price: f64,
    /// Mean daily drift as a fraction (0.0005 = 5 bps up per day).
    pub drift: f64,
    /// Daily return half-range as a fraction.
    pub volatility: f64,
    pub seed: u64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            days: 250,
            start_date: NaiveDate::from_ymd_opt(2023, 1, 2).expect("valid literal date"),
            start_price: 100.0,
            drift: 0.0002,
            volatility: 0.02,
            seed: 42,
        }
    }
}

/// Generate a synthetic daily OHLCV series.
///
/// Deterministic for a given seed. Weekends are skipped so the dates look
/// like a trading calendar. Generated records always satisfy
/// `high >= max(open, close)` and `low <= min(open, close)` with
/// non-negative prices, so they pass ingestion-level validation.
pub fn generate_series(config: &SyntheticConfig) -> Vec<OhlcvRecord> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut records = Vec::with_capacity(config.days);
    let mut price = config.start_price;
    let mut date = config.start_date;

    while records.len() < config.days {
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            date += Duration::days(1);
            continue;
        }

        let daily_return = config.drift + rng.gen_range(-config.volatility..config.volatility);
        let open = price;
        let close = (price * (1.0 + daily_return)).max(0.01);
        let high = open.max(close) * (1.0 + rng.gen_range(0.0..0.005));
        let low = (open.min(close) * (1.0 - rng.gen_range(0.0..0.005))).max(0.0);
        let volume = rng.gen_range(500_000..5_000_000u64);

        records.push(OhlcvRecord {
            date,
            open,
            high,
            low,
            close,
            volume,
        });

        price = close;
        date += Duration::days(1);
    }

    records
}
