//! Day-over-day fractional returns.

/// Compute day-over-day returns for a price series.
///
/// Returns a vector of the same length as the input. Index 0 is `None` (no
/// prior day). For `i >= 1` the value is `(prices[i] - prices[i-1]) /
/// prices[i-1]`; when the prior price is zero the ratio is non-finite and
/// is reported as `None`. Pure, no side effects.
pub fn daily_returns(prices: &[f64]) -> Vec<Option<f64>> {
    let mut result = vec![None; prices.len()];
    for i in 1..prices.len() {
        let prev = prices[i - 1];
        let ret = (prices[i] - prev) / prev;
        result[i] = ret.is_finite().then_some(ret);
    }
    result
}
