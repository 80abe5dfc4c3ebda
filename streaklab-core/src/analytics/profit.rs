//! Greedy maximum-profit extraction over the closing-price sequence.
//!
//! Unlimited transactions, no holding constraint: buying before every
//! positive day-over-day delta and selling after it is optimal — any
//! multi-day hold decomposes into its daily up-deltas — so the maximum
//! profit is the sum of all positive deltas.

use serde::{Deserialize, Serialize};

/// One buy/sell pair. By construction `sell_index == buy_index + 1` and
/// `profit > 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub buy_index: usize,
    pub sell_index: usize,
    pub buy_price: f64,
    pub sell_price: f64,
    pub profit: f64,
}

/// Total extractable profit plus the transaction trace, in index order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfitReport {
    pub total_profit: f64,
    pub transactions: Vec<Transaction>,
}

/// Maximum profit under the unlimited-transactions buy/sell model.
///
/// Fewer than two prices yields zero profit and an empty trace — a defined
/// result, not an error. Pure, deterministic.
pub fn max_profit(prices: &[f64]) -> ProfitReport {
    let mut report = ProfitReport::default();

    for i in 1..prices.len() {
        if prices[i] > prices[i - 1] {
            let profit = prices[i] - prices[i - 1];
            report.transactions.push(Transaction {
                buy_index: i - 1,
                sell_index: i,
                buy_price: prices[i - 1],
                sell_price: prices[i],
                profit,
            });
            report.total_profit += profit;
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn fixture_profit_is_12() {
        let report = max_profit(&[
            100.0, 102.0, 101.0, 103.0, 105.0, 104.0, 106.0, 108.0, 107.0, 109.0,
        ]);
        assert_approx(report.total_profit, 12.0, DEFAULT_EPSILON);
        assert_eq!(report.transactions.len(), 6);
        for tx in &report.transactions {
            assert_eq!(tx.sell_index, tx.buy_index + 1);
            assert_approx(tx.profit, 2.0, DEFAULT_EPSILON);
            assert!(tx.profit > 0.0);
        }
    }

    #[test]
    fn monotone_increasing_series() {
        let prices = [1.0, 2.0, 4.0, 7.0, 11.0];
        let report = max_profit(&prices);
        assert_approx(report.total_profit, 10.0, DEFAULT_EPSILON);
        assert_eq!(report.transactions.len(), prices.len() - 1);
    }

    #[test]
    fn monotone_decreasing_series_has_zero_profit() {
        let report = max_profit(&[5.0, 4.0, 3.0, 2.0, 1.0]);
        assert_eq!(report.total_profit, 0.0);
        assert!(report.transactions.is_empty());
    }

    #[test]
    fn short_series_yields_empty_report() {
        assert_eq!(max_profit(&[]), ProfitReport::default());
        assert_eq!(max_profit(&[100.0]), ProfitReport::default());
    }

    #[test]
    fn flat_days_produce_no_transactions() {
        let report = max_profit(&[10.0, 10.0, 12.0, 12.0]);
        assert_approx(report.total_profit, 2.0, DEFAULT_EPSILON);
        assert_eq!(report.transactions.len(), 1);
        assert_eq!(report.transactions[0].buy_index, 1);
        assert_eq!(report.transactions[0].sell_index, 2);
    }

    #[test]
    fn profit_equals_sum_of_positive_deltas() {
        let prices: [f64; 7] = [3.0, 8.0, 2.0, 9.0, 9.0, 1.0, 4.0];
        let expected: f64 = prices
            .windows(2)
            .map(|w| (w[1] - w[0]).max(0.0))
            .sum();
        let report = max_profit(&prices);
        assert_approx(report.total_profit, expected, DEFAULT_EPSILON);
    }
}
