//! CSV ingestion — typed parsing and validation of uploaded OHLCV files.
//!
//! Parsing is strict: every field is parsed to its typed form and
//! violations are reported as structured errors naming the row and column.
//! No loose numeric coercion. Headers are matched case-insensitively after
//! trimming; extra columns are ignored.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

use crate::domain::OhlcvRecord;

/// Columns that must be present in an uploaded file.
pub const REQUIRED_COLUMNS: [&str; 6] = ["date", "open", "high", "low", "close", "volume"];

/// Structured ingestion errors.
///
/// These reject the whole upload before the analytical core ever sees the
/// data; they are designed to be displayed verbatim to the uploader.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required columns {missing:?} (found: {found:?})")]
    MissingColumns {
        missing: Vec<String>,
        found: Vec<String>,
    },

    #[error("file contains no data rows")]
    Empty,

    #[error("row {row}, column '{column}': cannot accept '{value}': {reason}")]
    InvalidField {
        row: usize,
        column: &'static str,
        value: String,
        reason: String,
    },
}

/// Load and validate OHLCV records from a CSV file on disk.
pub fn load_csv(path: &Path) -> Result<Vec<OhlcvRecord>, IngestError> {
    let file = std::fs::File::open(path)?;
    read_csv(file)
}

/// Normalized header row of a CSV input (trimmed, lowercased).
pub fn csv_headers<R: Read>(reader: R) -> Result<Vec<String>, IngestError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);
    Ok(normalize_headers(rdr.headers()?))
}

/// Parse and validate OHLCV records from any CSV reader.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<OhlcvRecord>, IngestError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let found = normalize_headers(rdr.headers()?);
    let mut columns = [0usize; REQUIRED_COLUMNS.len()];
    let mut missing = Vec::new();
    for (slot, name) in REQUIRED_COLUMNS.iter().enumerate() {
        match found.iter().position(|h| h == name) {
            Some(position) => columns[slot] = position,
            None => missing.push(name.to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(IngestError::MissingColumns { missing, found });
    }
    let [date_col, open_col, high_col, low_col, close_col, volume_col] = columns;

    let mut records = Vec::new();
    for (i, row) in rdr.records().enumerate() {
        let row = row?;
        // 1-based, counting the header line, so errors point at the file.
        let rownum = i + 2;
        records.push(OhlcvRecord {
            date: parse_date(&row, date_col, rownum)?,
            open: parse_price(&row, open_col, "open", rownum)?,
            high: parse_price(&row, high_col, "high", rownum)?,
            low: parse_price(&row, low_col, "low", rownum)?,
            close: parse_price(&row, close_col, "close", rownum)?,
            volume: parse_volume(&row, volume_col, rownum)?,
        });
    }

    if records.is_empty() {
        return Err(IngestError::Empty);
    }
    debug!(rows = records.len(), "parsed OHLCV records");
    Ok(records)
}

fn normalize_headers(headers: &csv::StringRecord) -> Vec<String> {
    headers
        .iter()
        .map(|h| h.trim().to_ascii_lowercase())
        .collect()
}

fn field<'a>(
    row: &'a csv::StringRecord,
    col: usize,
    column: &'static str,
    rownum: usize,
) -> Result<&'a str, IngestError> {
    row.get(col).ok_or_else(|| IngestError::InvalidField {
        row: rownum,
        column,
        value: String::new(),
        reason: "missing value".into(),
    })
}

fn parse_date(
    row: &csv::StringRecord,
    col: usize,
    rownum: usize,
) -> Result<NaiveDate, IngestError> {
    let raw = field(row, col, "date", rownum)?;
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| IngestError::InvalidField {
        row: rownum,
        column: "date",
        value: raw.to_string(),
        reason: format!("expected YYYY-MM-DD ({e})"),
    })
}

fn parse_price(
    row: &csv::StringRecord,
    col: usize,
    column: &'static str,
    rownum: usize,
) -> Result<f64, IngestError> {
    let raw = field(row, col, column, rownum)?;
    let value: f64 = raw.parse().map_err(|_| IngestError::InvalidField {
        row: rownum,
        column,
        value: raw.to_string(),
        reason: "expected a number".into(),
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(IngestError::InvalidField {
            row: rownum,
            column,
            value: raw.to_string(),
            reason: "prices must be finite and non-negative".into(),
        });
    }
    Ok(value)
}

fn parse_volume(
    row: &csv::StringRecord,
    col: usize,
    rownum: usize,
) -> Result<u64, IngestError> {
    let raw = field(row, col, "volume", rownum)?;
    raw.parse().map_err(|_| IngestError::InvalidField {
        row: rownum,
        column: "volume",
        value: raw.to_string(),
        reason: "expected a non-negative integer".into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = "\
date,open,high,low,close,volume
2023-01-01,100,101,99,100,1000
2023-01-02,100,103,100,102,1100
";

    #[test]
    fn parses_valid_csv() {
        let records = read_csv(GOOD.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, "2023-01-01".parse().unwrap());
        assert_eq!(records[1].close, 102.0);
        assert_eq!(records[1].volume, 1100);
    }

    #[test]
    fn headers_are_case_insensitive_and_reordered() {
        let input = "\
Volume, Close ,DATE,Open,High,Low
500,102.5,2023-01-01,100,103,99
";
        let records = read_csv(input.as_bytes()).unwrap();
        assert_eq!(records[0].close, 102.5);
        assert_eq!(records[0].volume, 500);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let input = "\
date,open,high,low,close,volume,adj_close
2023-01-01,100,101,99,100,1000,100
";
        assert_eq!(read_csv(input.as_bytes()).unwrap().len(), 1);
    }

    #[test]
    fn reports_all_missing_columns() {
        let input = "date,open,close\n2023-01-01,100,101\n";
        match read_csv(input.as_bytes()) {
            Err(IngestError::MissingColumns { missing, found }) => {
                assert_eq!(missing, vec!["high", "low", "volume"]);
                assert_eq!(found, vec!["date", "open", "close"]);
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_input() {
        let input = "date,open,high,low,close,volume\n";
        assert!(matches!(read_csv(input.as_bytes()), Err(IngestError::Empty)));
    }

    #[test]
    fn rejects_negative_price() {
        let input = "\
date,open,high,low,close,volume
2023-01-01,100,101,-1,100,1000
";
        match read_csv(input.as_bytes()) {
            Err(IngestError::InvalidField { row, column, .. }) => {
                assert_eq!(row, 2);
                assert_eq!(column, "low");
            }
            other => panic!("expected InvalidField, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unparseable_date() {
        let input = "\
date,open,high,low,close,volume
01/02/2023,100,101,99,100,1000
";
        match read_csv(input.as_bytes()) {
            Err(IngestError::InvalidField { column, value, .. }) => {
                assert_eq!(column, "date");
                assert_eq!(value, "01/02/2023");
            }
            other => panic!("expected InvalidField, got {other:?}"),
        }
    }

    #[test]
    fn rejects_fractional_volume() {
        let input = "\
date,open,high,low,close,volume
2023-01-01,100,101,99,100,1000.5
";
        assert!(matches!(
            read_csv(input.as_bytes()),
            Err(IngestError::InvalidField { column: "volume", .. })
        ));
    }

    #[test]
    fn csv_headers_are_normalized() {
        let headers = csv_headers(GOOD.as_bytes()).unwrap();
        assert_eq!(headers, vec!["date", "open", "high", "low", "close", "volume"]);
    }
}
