//! Report export — JSON, CSV, and Markdown artifact generation.
//!
//! Three formats:
//! - **JSON**: full round-trip serialization with schema versioning
//! - **CSV**: the daily-record tape for external analysis tools
//! - **Markdown**: human-readable single-run report
//!
//! All persisted reports carry a `schema_version` field. Unknown versions
//! are rejected on load.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use streaklab_core::analytics::DailyRecord;

use crate::runner::{AnalysisReport, SCHEMA_VERSION};

// ─── JSON export ────────────────────────────────────────────────────

/// Serialize an `AnalysisReport` to pretty JSON.
pub fn export_json(report: &AnalysisReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("failed to serialize AnalysisReport to JSON")
}

/// Deserialize an `AnalysisReport` from JSON, rejecting unknown schema
/// versions.
pub fn import_json(json: &str) -> Result<AnalysisReport> {
    let report: AnalysisReport =
        serde_json::from_str(json).context("failed to deserialize AnalysisReport from JSON")?;
    if report.schema_version > SCHEMA_VERSION {
        bail!(
            "unsupported schema version {} (max supported: {})",
            report.schema_version,
            SCHEMA_VERSION
        );
    }
    Ok(report)
}

// ─── CSV export ─────────────────────────────────────────────────────

/// Export the daily-record tape as CSV.
///
/// Optional fields (SMA warmup, first-day return, run membership) are
/// emitted as empty cells.
pub fn export_records_csv(records: &[DailyRecord]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "date",
        "open",
        "high",
        "low",
        "close",
        "volume",
        "sma",
        "daily_return",
        "price_change",
        "price_change_pct",
        "run_direction",
        "run_length",
        "run_position",
    ])
    .context("failed to write CSV header")?;

    for rec in records {
        let (direction, length, position) = match rec.run_membership {
            Some(m) => (m.direction.to_string(), m.length.to_string(), m.position.to_string()),
            None => (String::new(), String::new(), String::new()),
        };
        wtr.write_record([
            rec.date.to_string(),
            rec.open.to_string(),
            rec.high.to_string(),
            rec.low.to_string(),
            rec.close.to_string(),
            rec.volume.to_string(),
            rec.sma.map(|v| v.to_string()).unwrap_or_default(),
            rec.daily_return.map(|v| v.to_string()).unwrap_or_default(),
            rec.price_change.to_string(),
            rec.price_change_pct.to_string(),
            direction,
            length,
            position,
        ])
        .context("failed to write CSV row")?;
    }

    let bytes = wtr
        .into_inner()
        .context("failed to flush CSV writer")?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

// ─── Markdown export ────────────────────────────────────────────────

/// Render a human-readable single-run report.
pub fn render_markdown(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let summary = &report.summary;

    let _ = writeln!(out, "# Analysis report");
    let _ = writeln!(out);
    let _ = writeln!(out, "- Days analyzed: {}", summary.total_days);
    let _ = writeln!(
        out,
        "- Close range: {:.2} – {:.2}",
        summary.price_range.min, summary.price_range.max
    );
    let _ = writeln!(out, "- Average volume: {:.0}", summary.avg_volume);
    match summary.volatility {
        Some(vol) => {
            let _ = writeln!(out, "- Volatility (daily returns, sample σ): {:.4}", vol);
        }
        None => {
            let _ = writeln!(out, "- Volatility: n/a (fewer than two returns)");
        }
    }
    let _ = writeln!(out, "- SMA window: {}", report.sma_window);
    let _ = writeln!(out, "- Dataset hash: `{}`", report.dataset_hash);
    if !report.skipped.is_empty() {
        let _ = writeln!(out, "- Skipped days: {}", report.skipped.len());
    }
    let _ = writeln!(out);

    let runs = &report.runs;
    let _ = writeln!(out, "## Runs");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} upward ({} days, longest {}), {} downward ({} days, longest {})",
        runs.total_upward_runs,
        runs.total_upward_days,
        runs.longest_upward_streak,
        runs.total_downward_runs,
        runs.total_downward_days,
        runs.longest_downward_streak,
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "| start | end | length | direction |");
    let _ = writeln!(out, "|------:|----:|-------:|-----------|");
    for run in &runs.runs {
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} |",
            run.start_index,
            run.end_index,
            run.length(),
            run.direction
        );
    }
    let _ = writeln!(out);

    let profit = &report.max_profit;
    let _ = writeln!(out, "## Maximum profit");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Total: {:.2} over {} transaction(s)",
        profit.total_profit,
        profit.transactions.len()
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "| buy day | sell day | buy | sell | profit |");
    let _ = writeln!(out, "|--------:|---------:|----:|-----:|-------:|");
    for tx in &profit.transactions {
        let _ = writeln!(
            out,
            "| {} | {} | {:.2} | {:.2} | {:.2} |",
            tx.buy_index, tx.sell_index, tx.buy_price, tx.sell_price, tx.profit
        );
    }

    out
}

// ─── Artifact saving ────────────────────────────────────────────────

/// Write report.json, records.csv, and report.md into `output_dir`.
///
/// Creates the directory if needed. Returns the written paths.
pub fn save_artifacts(report: &AnalysisReport, output_dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;

    let json_path = output_dir.join("report.json");
    std::fs::write(&json_path, export_json(report)?)
        .with_context(|| format!("failed to write {}", json_path.display()))?;

    let csv_path = output_dir.join("records.csv");
    std::fs::write(&csv_path, export_records_csv(&report.records)?)
        .with_context(|| format!("failed to write {}", csv_path.display()))?;

    let md_path = output_dir.join("report.md");
    std::fs::write(&md_path, render_markdown(report))
        .with_context(|| format!("failed to write {}", md_path.display()))?;

    Ok(vec![json_path, csv_path, md_path])
}
