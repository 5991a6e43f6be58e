//! Country-year panel builder.
//!
//! Turns the raw long-format extract into exactly one annual observation per
//! (country, year, indicator) and reshapes it to one row per (country, year).
//! The stages run in a fixed order, each narrowing the candidate set:
//!
//! 1. keep tracked indicators
//! 2. keep the configured frequency (annual)
//! 3. keep whole-population rows (every breakdown at its sentinel)
//! 4. coerce year, value, and unit multiplier, normalizing to millions
//! 5. resolve duplicates by status rank, then input position
//! 6. pivot into [`PanelRow`]s ordered by (iso3, year)

mod pivot;
mod select;

use std::time::Instant;

use polars::prelude::{Column, DataFrame};
use tracing::{debug, info};

use unctad_ingest::any_to_string;
use unctad_model::columns::{self, RAW_REQUIRED};
use unctad_model::{PanelOptions, PanelRow, RawObservation};

use crate::error::{Result, check_schema};
use crate::frame::panel_frame;

pub use pivot::pivot_panel;
pub use select::{Candidate, normalize_to_millions, resolve_duplicates, select_observations};

/// Row counts after each panel stage, for logging and summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelStats {
    pub input_rows: usize,
    pub indicator_rows: usize,
    pub frequency_rows: usize,
    pub total_rows: usize,
    pub duplicates_dropped: usize,
    /// Selected observations with no usable (area, year) key.
    pub unkeyed_dropped: usize,
    pub output_rows: usize,
}

/// Extracts typed observations from a raw extract table, in input order.
///
/// # Errors
///
/// [`crate::TransformError::Schema`] if any of the 14 source columns is absent.
pub fn observations_from_frame(df: &DataFrame) -> Result<Vec<RawObservation>> {
    check_schema(df, &RAW_REQUIRED, "panel")?;

    let area_code = df.column(columns::REF_AREA)?;
    let area_label = df.column(columns::REF_AREA_LABEL)?;
    let indicator = df.column(columns::INDICATOR)?;
    let time_period = df.column(columns::TIME_PERIOD)?;
    let obs_value = df.column(columns::OBS_VALUE)?;
    let unit_mult = df.column(columns::UNIT_MULT)?;
    let freq = df.column(columns::FREQ)?;
    let sex = df.column(columns::SEX)?;
    let age = df.column(columns::AGE)?;
    let urbanisation = df.column(columns::URBANISATION)?;
    let comp_1 = df.column(columns::COMP_BREAKDOWN_1)?;
    let comp_2 = df.column(columns::COMP_BREAKDOWN_2)?;
    let comp_3 = df.column(columns::COMP_BREAKDOWN_3)?;
    let status = df.column(columns::OBS_STATUS)?;

    let cell = |series: &Column, idx: usize| -> Result<String> {
        Ok(any_to_string(series.get(idx)?))
    };

    let mut observations = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        observations.push(RawObservation {
            position: idx,
            area_code: cell(area_code, idx)?,
            area_label: cell(area_label, idx)?,
            indicator_code: cell(indicator, idx)?,
            time_period: cell(time_period, idx)?,
            obs_value: cell(obs_value, idx)?,
            unit_mult: cell(unit_mult, idx)?,
            freq: cell(freq, idx)?,
            sex: cell(sex, idx)?,
            age: cell(age, idx)?,
            urbanisation: cell(urbanisation, idx)?,
            comp_breakdown_1: cell(comp_1, idx)?,
            comp_breakdown_2: cell(comp_2, idx)?,
            comp_breakdown_3: cell(comp_3, idx)?,
            obs_status: cell(status, idx)?,
        });
    }
    Ok(observations)
}

/// Runs selection, duplicate resolution, and the pivot over typed observations.
pub fn build_panel_rows(
    observations: &[RawObservation],
    options: &PanelOptions,
) -> (Vec<PanelRow>, PanelStats) {
    let mut stats = PanelStats {
        input_rows: observations.len(),
        ..PanelStats::default()
    };
    let candidates = select_observations(observations, options, &mut stats);
    let selected = candidates.len();
    let resolved = resolve_duplicates(candidates);
    stats.duplicates_dropped = selected - resolved.len();
    let rows = pivot_panel(&resolved, &mut stats);
    stats.output_rows = rows.len();
    debug!(
        input_rows = stats.input_rows,
        indicator_rows = stats.indicator_rows,
        frequency_rows = stats.frequency_rows,
        total_rows = stats.total_rows,
        duplicates_dropped = stats.duplicates_dropped,
        unkeyed_dropped = stats.unkeyed_dropped,
        "panel selection"
    );
    (rows, stats)
}

/// Builds the country-year panel table from a raw extract table.
///
/// Output columns: `country, iso3, year, dig_services_exports_usd_millions,
/// dig_services_imports_usd_millions`, sorted by (iso3, year). Both measure
/// columns are always present, entirely null if nothing populated them.
///
/// # Errors
///
/// [`crate::TransformError::Schema`] if a required source column is absent.
pub fn build_country_year_panel(df: &DataFrame, options: &PanelOptions) -> Result<DataFrame> {
    let start = Instant::now();
    let observations = observations_from_frame(df)?;
    let (rows, stats) = build_panel_rows(&observations, options);
    let panel = panel_frame(&rows)?;
    info!(
        input_rows = stats.input_rows,
        output_rows = stats.output_rows,
        duration_ms = start.elapsed().as_millis(),
        "country-year panel built"
    );
    Ok(panel)
}
