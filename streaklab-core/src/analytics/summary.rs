//! Headline summary statistics for an analyzed series.

use serde::{Deserialize, Serialize};

use crate::domain::TimeSeries;

/// Closing-price range over the series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// Headline statistics over a series and its returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub total_days: usize,
    pub price_range: PriceRange,
    pub avg_volume: f64,
    /// Sample standard deviation of the defined daily returns.
    /// `None` when fewer than two returns are defined.
    pub volatility: Option<f64>,
}

/// Compute headline statistics from a series and its returns series.
pub fn summarize(series: &TimeSeries, returns: &[Option<f64>]) -> SeriesSummary {
    let closes = series.closes();
    let min = closes.iter().copied().fold(f64::INFINITY, f64::min);
    let max = closes.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let total_volume: u64 = series.iter().map(|r| r.volume).sum();
    let avg_volume = total_volume as f64 / series.len() as f64;

    SeriesSummary {
        total_days: series.len(),
        price_range: PriceRange { min, max },
        avg_volume,
        volatility: sample_std_dev(returns),
    }
}

/// Sample standard deviation (n-1 denominator) of the defined values.
fn sample_std_dev(values: &[Option<f64>]) -> Option<f64> {
    let defined: Vec<f64> = values.iter().flatten().copied().collect();
    if defined.len() < 2 {
        return None;
    }
    let n = defined.len() as f64;
    let mean = defined.iter().sum::<f64>() / n;
    let variance = defined.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    Some(variance.sqrt())
}
