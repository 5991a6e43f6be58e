//! Pipeline stages: load, transform, write.
//!
//! Each stage reads one CSV and writes one CSV. The transforms themselves
//! live in `unctad-transform` and never touch the filesystem.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use unctad_ingest::{load_panel, load_unctad_de};
use unctad_model::{AggregateExclusions, AggregateOptions, PanelOptions, RegionSet};
use unctad_output::write_csv;
use unctad_transform::{aggregate_panel, build_country_year_panel};

/// Default directory holding the raw extract and both outputs.
pub const DEFAULT_DATA_DIR: &str = "datasets";
/// Raw UNCTAD Digital Economy extract.
pub const RAW_FILE_NAME: &str = "UNCTAD_DE.csv";
pub const PANEL_FILE_NAME: &str = "unctad_country_year_digital_services_trade_panel.csv";
pub const AGGREGATES_FILE_NAME: &str =
    "unctad_regional_aggregates_dig_services_trade_by_year.csv";

/// File locations for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub raw: PathBuf,
    pub panel: PathBuf,
    pub aggregates: PathBuf,
}

impl DataPaths {
    /// Default file names under `data_dir`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self {
            raw: data_dir.join(RAW_FILE_NAME),
            panel: data_dir.join(PANEL_FILE_NAME),
            aggregates: data_dir.join(AGGREGATES_FILE_NAME),
        }
    }
}

/// Outcome of one stage, for the summary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport {
    pub stage: &'static str,
    pub input: PathBuf,
    pub input_rows: usize,
    pub output: PathBuf,
    pub output_rows: usize,
}

/// Regional aggregation settings resolved from flags and config files.
#[derive(Debug, Clone, Default)]
pub struct AggregateSettings {
    pub regions: RegionSet,
    pub exclusions: AggregateExclusions,
    pub options: AggregateOptions,
}

/// Builds the country-year panel from the raw extract at `input`.
///
/// # Errors
///
/// Fails when `input` is missing or unreadable, when a required column is
/// absent, or when `output` cannot be written.
pub fn run_panel_stage(input: &Path, output: &Path, options: &PanelOptions) -> Result<StageReport> {
    let span = info_span!("panel", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let raw = load_unctad_de(input)?;
    let mut panel = build_country_year_panel(&raw, options)?;
    let written = write_csv(&mut panel, output)?;
    info!(
        rows = written,
        path = %output.display(),
        duration_ms = start.elapsed().as_millis(),
        "panel written"
    );
    Ok(StageReport {
        stage: "panel",
        input: input.to_path_buf(),
        input_rows: raw.height(),
        output: output.to_path_buf(),
        output_rows: written,
    })
}

/// Builds region-year aggregates from the panel CSV at `input`.
///
/// # Errors
///
/// Fails when the panel file is missing (the panel stage has not run), when
/// a required panel column is absent, or when `output` cannot be written.
pub fn run_aggregate_stage(
    input: &Path,
    output: &Path,
    settings: &AggregateSettings,
) -> Result<StageReport> {
    let span = info_span!("aggregate", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let panel = load_panel(input)?;
    let mut aggregates = aggregate_panel(
        &panel,
        &settings.regions,
        &settings.exclusions,
        &settings.options,
    )?;
    let written = write_csv(&mut aggregates, output)?;
    info!(
        rows = written,
        path = %output.display(),
        duration_ms = start.elapsed().as_millis(),
        "regional aggregates written"
    );
    Ok(StageReport {
        stage: "aggregate",
        input: input.to_path_buf(),
        input_rows: panel.height(),
        output: output.to_path_buf(),
        output_rows: written,
    })
}

/// Runs both stages in order; the aggregate stage reads the panel just written.
///
/// # Errors
///
/// Stops at the first failing stage.
pub fn run_all(
    paths: &DataPaths,
    panel_options: &PanelOptions,
    settings: &AggregateSettings,
) -> Result<Vec<StageReport>> {
    let panel = run_panel_stage(&paths.raw, &paths.panel, panel_options)
        .context("panel stage failed")?;
    let aggregates = run_aggregate_stage(&paths.panel, &paths.aggregates, settings)
        .context("aggregate stage failed")?;
    Ok(vec![panel, aggregates])
}
