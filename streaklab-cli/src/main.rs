//! Streaklab CLI — OHLCV streak & trend analytics.
//!
//! Commands:
//! - `analyze` — ingest a CSV, run the full analysis, save report artifacts
//! - `inspect` — report row count, columns, and date range of a CSV
//! - `selfcheck` — run the built-in fixture checks
//! - `generate` — write a synthetic OHLCV CSV for demos and testing

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use streaklab_core::data::{csv_headers, generate_series, load_csv, SyntheticConfig};
use streaklab_core::domain::TimeSeries;
use streaklab_runner::{
    export_json, run_analysis, run_selfcheck, save_artifacts, AnalysisConfig, AnalysisReport,
    DatasetStore,
};

#[derive(Parser)]
#[command(
    name = "streaklab",
    about = "streaklab — OHLCV streak & trend analytics"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis over a CSV file and save report artifacts.
    Analyze {
        /// Input CSV with date, open, high, low, close, volume columns.
        #[arg(long)]
        input: PathBuf,

        /// Trend smoothing window (days). Overrides the config file.
        #[arg(long)]
        sma_window: Option<usize>,

        /// Path to a TOML config file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output directory for report artifacts.
        #[arg(long, default_value = "results")]
        output_dir: PathBuf,

        /// Print the full JSON report to stdout instead of saving artifacts.
        #[arg(long, default_value_t = false)]
        stdout: bool,
    },
    /// Show row count, columns, and date range for a CSV file.
    Inspect {
        /// Input CSV to inspect.
        #[arg(long)]
        input: PathBuf,
    },
    /// Run the built-in fixture checks.
    Selfcheck,
    /// Generate a synthetic OHLCV CSV.
    Generate {
        /// Output CSV path.
        #[arg(long)]
        output: PathBuf,

        /// Number of trading days to generate.
        #[arg(long, default_value_t = 250)]
        days: usize,

        /// RNG seed (same seed, same data).
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// First close price of the walk.
        #[arg(long, default_value_t = 100.0)]
        start_price: f64,

        /// First calendar date (YYYY-MM-DD).
        #[arg(long)]
        start_date: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            sma_window,
            config,
            output_dir,
            stdout,
        } => run_analyze(input, sma_window, config, output_dir, stdout),
        Commands::Inspect { input } => run_inspect(input),
        Commands::Selfcheck => run_selfcheck_cmd(),
        Commands::Generate {
            output,
            days,
            seed,
            start_price,
            start_date,
        } => run_generate(output, days, seed, start_price, start_date),
    }
}

fn run_analyze(
    input: PathBuf,
    sma_window: Option<usize>,
    config_path: Option<PathBuf>,
    output_dir: PathBuf,
    stdout: bool,
) -> Result<()> {
    let mut config = match &config_path {
        Some(path) => AnalysisConfig::from_toml_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => AnalysisConfig::default(),
    };
    if let Some(window) = sma_window {
        config.sma_window = window;
        config.validate()?;
    }

    let records = load_csv(&input)
        .with_context(|| format!("failed to ingest {}", input.display()))?;
    let series = TimeSeries::from_records(records)?;

    // Ingest → snapshot → analyze, the same shape a long-lived session uses.
    let store = DatasetStore::new();
    let snapshot = store.replace(series);
    let report = run_analysis(&snapshot, &config)?;

    if stdout {
        println!("{}", export_json(&report)?);
    } else {
        print_headline(&report);
        save_artifacts(&report, &output_dir)?;
        println!("Artifacts saved to: {}", output_dir.display());
    }
    Ok(())
}

fn print_headline(report: &AnalysisReport) {
    let summary = &report.summary;
    println!(
        "Analyzed {} days ({} – {})",
        summary.total_days,
        report.sma.dates.first().map(|d| d.to_string()).unwrap_or_default(),
        report.sma.dates.last().map(|d| d.to_string()).unwrap_or_default(),
    );
    println!(
        "Close range {:.2} – {:.2}, average volume {:.0}",
        summary.price_range.min, summary.price_range.max, summary.avg_volume
    );
    println!(
        "Runs: {} up (longest {}), {} down (longest {})",
        report.runs.total_upward_runs,
        report.runs.longest_upward_streak,
        report.runs.total_downward_runs,
        report.runs.longest_downward_streak,
    );
    println!(
        "Max profit: {:.2} over {} transaction(s), SMA window {}",
        report.max_profit.total_profit,
        report.max_profit.transactions.len(),
        report.sma_window,
    );
    if !report.skipped.is_empty() {
        println!("Skipped {} malformed day(s)", report.skipped.len());
    }
}

fn run_inspect(input: PathBuf) -> Result<()> {
    let file = std::fs::File::open(&input)
        .with_context(|| format!("failed to open {}", input.display()))?;
    let columns = csv_headers(file)?;

    let records = load_csv(&input)
        .with_context(|| format!("failed to ingest {}", input.display()))?;
    let series = TimeSeries::from_records(records)?;

    println!("File: {}", input.display());
    println!("Rows: {}", series.len());
    println!("Columns: {}", columns.join(", "));
    println!("Date range: {} – {}", series.first_date(), series.last_date());
    Ok(())
}

fn run_selfcheck_cmd() -> Result<()> {
    let report = run_selfcheck();
    for case in &report.cases {
        let status = if case.passed { "PASS" } else { "FAIL" };
        println!(
            "[{status}] {} (expected {}, got {})",
            case.name, case.expected, case.actual
        );
    }
    println!("{}/{} checks passed", report.passed, report.total);
    if !report.all_passed() {
        bail!("self-check failed");
    }
    Ok(())
}

fn run_generate(
    output: PathBuf,
    days: usize,
    seed: u64,
    start_price: f64,
    start_date: Option<String>,
) -> Result<()> {
    let mut config = SyntheticConfig {
        days,
        seed,
        start_price,
        ..Default::default()
    };
    if let Some(raw) = start_date {
        config.start_date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .with_context(|| format!("invalid date '{raw}' (expected YYYY-MM-DD)"))?;
    }

    let records = generate_series(&config);

    let mut wtr = csv::Writer::from_path(&output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    wtr.write_record(["date", "open", "high", "low", "close", "volume"])?;
    for rec in &records {
        wtr.write_record([
            rec.date.to_string(),
            rec.open.to_string(),
            rec.high.to_string(),
            rec.low.to_string(),
            rec.close.to_string(),
            rec.volume.to_string(),
        ])?;
    }
    wtr.flush()?;

    println!(
        "Wrote {} synthetic days to {} (seed {seed})",
        records.len(),
        output.display()
    );
    Ok(())
}
