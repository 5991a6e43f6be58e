//! Data ingestion for UNCTAD Digital Economy extracts.
//!
//! Loads delimited files into Polars DataFrames with every column read as
//! text, and provides the null-on-failure coercion helpers used by the
//! transform stages.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use unctad_ingest::{load_unctad_de, require_columns};
//!
//! let df = load_unctad_de(Path::new("datasets/UNCTAD_DE.csv"))?;
//! let missing = require_columns(&df, &["REF_AREA", "OBS_VALUE"]);
//! ```

mod csv;
mod error;
mod polars_utils;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{load_panel, load_unctad_de, read_csv_frame, require_columns};

// === Value Coercion ===
pub use polars_utils::{
    any_to_f64, any_to_i64, any_to_string, column_strings, format_numeric, parse_f64, parse_i64,
    parse_year,
};
