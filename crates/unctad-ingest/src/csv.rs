//! CSV file reading into text-typed DataFrames.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use crate::error::{IngestError, Result};

const PANEL_HINT: &str = "Run the `panel` stage first to build it";

fn open(path: &Path, hint: Option<&'static str>) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
                hint,
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

fn ensure_header(path: &Path, hint: Option<&'static str>) -> Result<()> {
    let mut first = String::new();
    BufReader::new(open(path, hint)?)
        .read_line(&mut first)
        .map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
    if first.trim().trim_start_matches('\u{feff}').is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

fn read_frame(path: &Path, hint: Option<&'static str>) -> Result<DataFrame> {
    ensure_header(path, hint)?;

    // Schema inference off: every column is read as text and coerced later.
    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let bom_header = df
        .get_column_names()
        .first()
        .map(|name| name.as_str().to_string())
        .filter(|name| name.starts_with('\u{feff}'));
    if let Some(name) = bom_header {
        let cleaned = name.trim_start_matches('\u{feff}').to_string();
        df.rename(&name, cleaned.into())?;
    }

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read csv"
    );
    Ok(df)
}

/// Reads a header-row CSV into a DataFrame with every column typed as text.
///
/// # Errors
///
/// [`IngestError::FileNotFound`] if the file is absent, [`IngestError::EmptyCsv`]
/// if it has no header line, [`IngestError::CsvParse`] for malformed content.
pub fn read_csv_frame(path: &Path) -> Result<DataFrame> {
    read_frame(path, None)
}

/// Loads the raw UNCTAD_DE Data360 extract.
pub fn load_unctad_de(path: &Path) -> Result<DataFrame> {
    read_frame(path, None)
}

/// Loads a previously built country-year panel.
pub fn load_panel(path: &Path) -> Result<DataFrame> {
    read_frame(path, Some(PANEL_HINT))
}

/// Returns the required columns absent from `df`, sorted.
pub fn require_columns(df: &DataFrame, required: &[&str]) -> Vec<String> {
    let present: Vec<&str> = df
        .get_column_names()
        .into_iter()
        .map(|name| name.as_str())
        .collect();
    let mut missing: Vec<String> = required
        .iter()
        .filter(|column| !present.contains(column))
        .map(|column| (*column).to_string())
        .collect();
    missing.sort();
    missing.dedup();
    missing
}
