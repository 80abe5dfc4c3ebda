//! Directional run (streak) detection over the returns series.
//!
//! A run is a maximal block of consecutive days whose close-price direction
//! is constant and non-zero. Zero-change days — and index 0, which has no
//! return — carry direction 0: they terminate the current run and never
//! open a length-1 run of their own.

use serde::{Deserialize, Serialize};

use crate::domain::{Direction, Run};

/// Ordered run list plus aggregate streak statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunAnalysis {
    pub runs: Vec<Run>,
    pub total_upward_runs: usize,
    pub total_downward_runs: usize,
    pub longest_upward_streak: usize,
    pub longest_downward_streak: usize,
    pub total_upward_days: usize,
    pub total_downward_days: usize,
}

impl RunAnalysis {
    fn from_runs(runs: Vec<Run>) -> Self {
        let mut analysis = RunAnalysis {
            runs,
            total_upward_runs: 0,
            total_downward_runs: 0,
            longest_upward_streak: 0,
            longest_downward_streak: 0,
            total_upward_days: 0,
            total_downward_days: 0,
        };
        for run in &analysis.runs {
            match run.direction {
                Direction::Upward => {
                    analysis.total_upward_runs += 1;
                    analysis.total_upward_days += run.length();
                    analysis.longest_upward_streak =
                        analysis.longest_upward_streak.max(run.length());
                }
                Direction::Downward => {
                    analysis.total_downward_runs += 1;
                    analysis.total_downward_days += run.length();
                    analysis.longest_downward_streak =
                        analysis.longest_downward_streak.max(run.length());
                }
            }
        }
        analysis
    }
}

/// Direction indicator for one day's return: +1, -1, or 0.
///
/// `None` (index 0, or an undefined ratio) counts as 0.
fn direction_of(ret: Option<f64>) -> i8 {
    match ret {
        Some(r) if r > 0.0 => 1,
        Some(r) if r < 0.0 => -1,
        _ => 0,
    }
}

/// Detect maximal same-direction runs in a daily-returns series.
///
/// Single forward O(n) pass. The scan seeds its direction from index 0,
/// which has no return and therefore direction 0 — so no run can ever start
/// at index 0; the earliest possible run start is index 1. A zero-direction
/// day closes any in-progress run without itself joining one.
pub fn analyze_runs(returns: &[Option<f64>]) -> RunAnalysis {
    let n = returns.len();
    let mut runs = Vec::new();

    if n > 0 {
        let mut current_direction = direction_of(returns[0]);
        let mut current_len = 1usize;

        for (i, ret) in returns.iter().enumerate().skip(1) {
            let dir = direction_of(*ret);
            if dir == current_direction && dir != 0 {
                current_len += 1;
            } else {
                if let Some(direction) = Direction::from_signum(current_direction) {
                    runs.push(Run {
                        start_index: i - current_len,
                        end_index: i - 1,
                        direction,
                    });
                }
                current_len = 1;
                current_direction = dir;
            }
        }

        if let Some(direction) = Direction::from_signum(current_direction) {
            runs.push(Run {
                start_index: n - current_len,
                end_index: n - 1,
                direction,
            });
        }
    }

    RunAnalysis::from_runs(runs)
}
