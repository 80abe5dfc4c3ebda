//! Streaklab Core — domain types and the OHLCV analytics engine.
//!
//! This crate contains the analytical heart of streaklab:
//! - Domain types (OHLCV records, the validated `TimeSeries`, runs)
//! - Trend smoothing (simple moving average)
//! - Day-over-day returns
//! - Directional run (streak) detection with aggregate statistics
//! - Greedy maximum-profit extraction with a transaction trace
//! - Per-day enriched record assembly with run back-references
//! - CSV ingestion and synthetic data generation
//!
//! Every analytical function is a pure function of an already-validated,
//! immutable `TimeSeries` (or a slice derived from one). Nothing in this
//! crate performs I/O except the `data` module.

pub mod analytics;
pub mod data;
pub mod domain;
