//! Run — a maximal consecutive same-direction price streak.

use serde::{Deserialize, Serialize};

/// Direction of a price run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Upward,
    Downward,
}

impl Direction {
    /// Map a direction indicator (+1 / -1 / 0) to a run direction.
    ///
    /// Zero (no change, or no prior day) maps to `None`: such days belong
    /// to no run.
    pub fn from_signum(signum: i8) -> Option<Direction> {
        match signum {
            1 => Some(Direction::Upward),
            -1 => Some(Direction::Downward),
            _ => None,
        }
    }

    pub fn signum(&self) -> i8 {
        match self {
            Direction::Upward => 1,
            Direction::Downward => -1,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Upward => write!(f, "upward"),
            Direction::Downward => write!(f, "downward"),
        }
    }
}

/// A maximal block of consecutive days whose close-price direction is
/// constant and non-zero.
///
/// Indices are 0-based positions into the owning `TimeSeries`, inclusive
/// on both ends. Runs produced by the analyzer are non-overlapping and
/// ordered by `start_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub start_index: usize,
    pub end_index: usize,
    pub direction: Direction,
}

impl Run {
    /// Number of days in the run.
    pub fn length(&self) -> usize {
        self.end_index - self.start_index + 1
    }

    /// Whether `index` falls inside the run (inclusive bounds).
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index <= self.end_index
    }
}
