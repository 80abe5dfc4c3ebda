//! Simple Moving Average (SMA) — the trend smoothing indicator.
//!
//! Rolling mean of prices over a trailing window.
//! First defined value at index window-1.

use thiserror::Error;

/// Errors from trend computation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrendError {
    #[error("invalid SMA window {window} for series of length {len}")]
    InvalidWindow { window: usize, len: usize },
}

/// Compute the simple moving average of `prices` over `window`.
///
/// Returns a vector of the same length as the input. The first `window - 1`
/// entries are `None` (insufficient history); entry `i >= window - 1` is the
/// arithmetic mean of `prices[i - window + 1 ..= i]`. A window containing a
/// non-finite price has no defined mean and yields `None` for that entry
/// only.
///
/// Fails with `InvalidWindow` when `window` is zero or exceeds the series
/// length. Pure, no side effects.
pub fn sma(prices: &[f64], window: usize) -> Result<Vec<Option<f64>>, TrendError> {
    if window < 1 || window > prices.len() {
        return Err(TrendError::InvalidWindow {
            window,
            len: prices.len(),
        });
    }

    let mut result = vec![None; prices.len()];

    // Initial window sum
    let mut sum = 0.0;
    let mut tainted = false;
    for &price in &prices[..window] {
        if !price.is_finite() {
            tainted = true;
        }
        sum += price;
    }
    if !tainted {
        result[window - 1] = Some(sum / window as f64);
    }

    // Roll the window forward
    for i in window..prices.len() {
        let leaving = prices[i - window];
        let entering = prices[i];
        sum = sum - leaving + entering;

        if entering.is_finite() && leaving.is_finite() && !tainted {
            result[i] = Some(sum / window as f64);
            continue;
        }

        // A non-finite value entered or left the window; the rolling sum is
        // unusable, so rescan the window to resync.
        tainted = false;
        sum = 0.0;
        for &price in &prices[i + 1 - window..=i] {
            if !price.is_finite() {
                tainted = true;
            }
            sum += price;
        }
        if !tainted {
            result[i] = Some(sum / window as f64);
        }
    }

    Ok(result)
}
