//! Typed rows exchanged between pipeline stages.

use serde::{Deserialize, Serialize};

use crate::Indicator;

/// One row of the raw long-format extract.
///
/// Cells are kept as text exactly as read; an empty string means the cell was
/// missing. Numeric coercion happens in the panel stage so that malformed
/// values degrade to nulls instead of failing the load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawObservation {
    /// Zero-based position in the source table, the final tie-break key.
    pub position: usize,
    pub area_code: String,
    pub area_label: String,
    pub indicator_code: String,
    pub time_period: String,
    pub obs_value: String,
    pub unit_mult: String,
    pub freq: String,
    pub sex: String,
    pub age: String,
    pub urbanisation: String,
    pub comp_breakdown_1: String,
    pub comp_breakdown_2: String,
    pub comp_breakdown_3: String,
    pub obs_status: String,
}

/// One (iso3, year) row of the country-year panel. Values are USD millions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelRow {
    pub country: String,
    pub iso3: String,
    pub year: i64,
    pub exports: Option<f64>,
    pub imports: Option<f64>,
}

impl PanelRow {
    pub fn new(country: impl Into<String>, iso3: impl Into<String>, year: i64) -> Self {
        Self {
            country: country.into(),
            iso3: iso3.into(),
            year,
            exports: None,
            imports: None,
        }
    }

    pub fn value(&self, indicator: Indicator) -> Option<f64> {
        match indicator {
            Indicator::Exports => self.exports,
            Indicator::Imports => self.imports,
        }
    }

    pub fn set_value(&mut self, indicator: Indicator, value: Option<f64>) {
        match indicator {
            Indicator::Exports => self.exports = value,
            Indicator::Imports => self.imports = value,
        }
    }

    #[must_use]
    pub fn with_value(mut self, indicator: Indicator, value: Option<f64>) -> Self {
        self.set_value(indicator, value);
        self
    }
}

/// One (region, year) row of the regional aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionAggregateRow {
    pub region: String,
    pub year: i64,
    /// Static size of the region's membership set.
    pub num_members: usize,
    pub num_reporting_exports: usize,
    pub num_reporting_imports: usize,
    pub exports_total: Option<f64>,
    pub imports_total: Option<f64>,
}

impl RegionAggregateRow {
    pub fn reporting(&self, indicator: Indicator) -> usize {
        match indicator {
            Indicator::Exports => self.num_reporting_exports,
            Indicator::Imports => self.num_reporting_imports,
        }
    }

    pub fn total(&self, indicator: Indicator) -> Option<f64> {
        match indicator {
            Indicator::Exports => self.exports_total,
            Indicator::Imports => self.imports_total,
        }
    }
}
