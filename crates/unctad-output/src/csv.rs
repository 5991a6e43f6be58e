//! CSV writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::debug;

use crate::common::ensure_parent_dir;

/// Writes `df` to `path` with a header row, creating parent directories.
///
/// Returns the number of data rows written.
pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<usize> {
    ensure_parent_dir(path)?;
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    CsvWriter::new(&mut writer)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("write {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    debug!(path = %path.display(), rows = df.height(), "csv written");
    Ok(df.height())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::Column;

    #[test]
    fn creates_missing_directories() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("deeper").join("out.csv");
        let mut df = DataFrame::new(vec![Column::new("iso3".into(), ["FRA", "DEU"])]).expect("df");

        let rows = write_csv(&mut df, &path).expect("write");
        assert_eq!(rows, 2);
        let text = std::fs::read_to_string(&path).expect("read");
        assert_eq!(text, "iso3\nFRA\nDEU\n");
    }
}
