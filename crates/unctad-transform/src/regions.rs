//! Region-year aggregation over the country-year panel.
//!
//! Each region is an independent view over the panel: a country listed in two
//! regions contributes to both. Aggregate geographies (World, continental
//! totals) are removed first unless the caller opts in for diagnostics.

use std::collections::BTreeMap;
use std::time::Instant;

use polars::prelude::{BooleanChunked, DataFrame, NewChunkedArray};
use tracing::{debug, info, warn};

use unctad_ingest::any_to_string;
use unctad_model::columns::{COUNTRY, ISO3};
use unctad_model::{
    AggregateExclusions, AggregateOptions, EmptyTotal, Indicator, PanelRow, RegionAggregateRow,
    RegionDefinition, RegionSet,
};

use crate::error::{Result, check_schema};
use crate::frame::{aggregate_frame, panel_rows_from_frame};

/// Drops rows whose `iso3` or `country` names an aggregate geography.
///
/// # Errors
///
/// [`crate::TransformError::Schema`] if `iso3` or `country` is absent.
pub fn filter_countries_only(
    df: &DataFrame,
    exclusions: &AggregateExclusions,
) -> Result<DataFrame> {
    check_schema(df, &[ISO3, COUNTRY], "filter")?;
    let iso3 = df.column(ISO3)?;
    let country = df.column(COUNTRY)?;

    let mut keep = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let code = any_to_string(iso3.get(idx)?);
        let label = any_to_string(country.get(idx)?);
        keep.push(!exclusions.is_aggregate(code.trim(), label.trim()));
    }
    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    let filtered = df.filter(&mask)?;
    debug!(
        input_rows = df.height(),
        excluded = df.height() - filtered.height(),
        "aggregate geographies filtered"
    );
    Ok(filtered)
}

#[derive(Debug, Default)]
struct Accumulator {
    exports: MeasureSum,
    imports: MeasureSum,
}

impl Accumulator {
    fn measure(&mut self, indicator: Indicator) -> &mut MeasureSum {
        match indicator {
            Indicator::Exports => &mut self.exports,
            Indicator::Imports => &mut self.imports,
        }
    }
}

#[derive(Debug, Default)]
struct MeasureSum {
    total: f64,
    reporting: usize,
}

impl MeasureSum {
    fn add(&mut self, value: Option<f64>) {
        if let Some(value) = value {
            self.total += value;
            self.reporting += 1;
        }
    }

    fn finish(&self, empty_total: EmptyTotal) -> Option<f64> {
        match (self.reporting, empty_total) {
            (0, EmptyTotal::Null) => None,
            _ => Some(self.total),
        }
    }
}

fn aggregate_region(
    rows: &[PanelRow],
    region: &RegionDefinition,
    options: &AggregateOptions,
) -> Vec<RegionAggregateRow> {
    let mut by_year: BTreeMap<i64, Accumulator> = BTreeMap::new();
    for row in rows.iter().filter(|row| region.contains(row.iso3.trim())) {
        let acc = by_year.entry(row.year).or_default();
        for indicator in Indicator::ALL {
            acc.measure(indicator).add(row.value(indicator));
        }
    }

    by_year
        .into_iter()
        .map(|(year, acc)| RegionAggregateRow {
            region: region.name.clone(),
            year,
            num_members: region.member_count(),
            num_reporting_exports: acc.exports.reporting,
            num_reporting_imports: acc.imports.reporting,
            exports_total: acc.exports.finish(options.empty_total),
            imports_total: acc.imports.finish(options.empty_total),
        })
        .collect()
}

/// Sums each region's member rows per year.
///
/// A year appears for a region when at least one member has a panel row for
/// it, even if every measure in those rows is empty. `num_members` is the
/// static membership size. Output is ordered by (region, year).
pub fn aggregate_regions(
    rows: &[PanelRow],
    regions: &RegionSet,
    options: &AggregateOptions,
) -> Vec<RegionAggregateRow> {
    let mut aggregates: Vec<RegionAggregateRow> = regions
        .iter()
        .flat_map(|region| aggregate_region(rows, region, options))
        .collect();
    aggregates.sort_by(|a, b| a.region.cmp(&b.region).then(a.year.cmp(&b.year)));
    aggregates
}

/// Builds the region-year table from a panel table.
///
/// Years and measures are coerced with null on failure; rows without a
/// usable year are ignored. No aggregate filtering happens here, see
/// [`aggregate_panel`].
///
/// # Errors
///
/// [`crate::TransformError::Schema`] if `iso3`, `year`, or a measure column
/// is absent.
pub fn build_region_year_aggregates(
    df: &DataFrame,
    regions: &RegionSet,
    options: &AggregateOptions,
) -> Result<DataFrame> {
    let rows = panel_rows_from_frame(df)?;
    let aggregates = aggregate_regions(&rows, regions, options);
    aggregate_frame(&aggregates)
}

/// Aggregation stage as run by the pipeline: optional pre-filter, then
/// [`build_region_year_aggregates`].
///
/// # Errors
///
/// [`crate::TransformError::Schema`] if a required panel column is absent.
pub fn aggregate_panel(
    df: &DataFrame,
    regions: &RegionSet,
    exclusions: &AggregateExclusions,
    options: &AggregateOptions,
) -> Result<DataFrame> {
    let start = Instant::now();
    let aggregates = if options.include_aggregates {
        warn!("including aggregate geographies; region totals may double count");
        build_region_year_aggregates(df, regions, options)?
    } else {
        let countries = filter_countries_only(df, exclusions)?;
        build_region_year_aggregates(&countries, regions, options)?
    };
    info!(
        regions = regions.len(),
        input_rows = df.height(),
        output_rows = aggregates.height(),
        duration_ms = start.elapsed().as_millis(),
        "regional aggregates built"
    );
    Ok(aggregates)
}
