//! Streaklab Runner — analysis orchestration, configuration, and export.
//!
//! This crate builds on `streaklab-core` to provide:
//! - The full analysis pipeline over an immutable `TimeSeries` snapshot
//! - TOML-backed configuration (`sma_window`)
//! - The dataset session store (ingest step → analyze step)
//! - JSON / CSV / Markdown report export with schema versioning
//! - Self-check fixtures mirroring the worked examples

pub mod config;
pub mod export;
pub mod runner;
pub mod selfcheck;
pub mod session;

pub use config::{AnalysisConfig, ConfigError, DEFAULT_SMA_WINDOW};
pub use export::{
    export_json, export_records_csv, import_json, render_markdown, save_artifacts,
};
pub use runner::{
    dataset_hash, run_analysis, AlignedSeries, AnalysisError, AnalysisReport, SkippedRecord,
    SCHEMA_VERSION,
};
pub use selfcheck::{run_selfcheck, CheckCase, SelfcheckReport};
pub use session::DatasetStore;
