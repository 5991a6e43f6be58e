//! Error types for the transform stages.

use polars::prelude::DataFrame;
use thiserror::Error;

use unctad_ingest::require_columns;

/// Errors raised by the panel and aggregation stages.
///
/// Per-cell coercion problems are never errors; they become null values.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransformError {
    /// A required column is absent from the input table.
    #[error("missing required columns for {stage}: {}", .missing.join(", "))]
    Schema {
        stage: &'static str,
        missing: Vec<String>,
    },

    /// Failed to build an output DataFrame.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;

pub(crate) fn check_schema(df: &DataFrame, required: &[&str], stage: &'static str) -> Result<()> {
    let missing = require_columns(df, required);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(TransformError::Schema { stage, missing })
    }
}
