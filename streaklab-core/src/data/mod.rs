//! Data ingestion and synthetic generation.

pub mod csv_loader;
pub mod synthetic;

pub use csv_loader::{csv_headers, load_csv, read_csv, IngestError, REQUIRED_COLUMNS};
pub use synthetic::{generate_series, SyntheticConfig};
