//! Configuration options for the panel and aggregation stages.

use serde::{Deserialize, Serialize};

use crate::{Indicator, StatusPriority};

/// Sentinel for "total" along a disaggregation axis.
pub const TOTAL: &str = "_T";
/// Sentinel for "not applicable" on a composite breakdown.
pub const NOT_APPLICABLE: &str = "_Z";
/// SDMX frequency code for annual observations.
pub const ANNUAL: &str = "A";

/// Required value for each breakdown dimension.
///
/// Only rows equal to these sentinels on every axis describe the whole
/// population; anything else is a sub-population and would collide with the
/// totals in the same (country, year, indicator) bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownFilter {
    pub sex: String,
    pub age: String,
    pub urbanisation: String,
    pub comp_breakdown_1: String,
    pub comp_breakdown_2: String,
    pub comp_breakdown_3: String,
}

impl Default for BreakdownFilter {
    fn default() -> Self {
        Self {
            sex: TOTAL.to_string(),
            age: TOTAL.to_string(),
            urbanisation: TOTAL.to_string(),
            comp_breakdown_1: NOT_APPLICABLE.to_string(),
            comp_breakdown_2: NOT_APPLICABLE.to_string(),
            comp_breakdown_3: NOT_APPLICABLE.to_string(),
        }
    }
}

/// Options for building the country-year panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelOptions {
    /// Indicators kept from the extract; each becomes a panel column.
    pub indicators: Vec<Indicator>,
    /// Frequency code of the observations to keep.
    pub frequency: String,
    pub breakdowns: BreakdownFilter,
    pub status_priority: StatusPriority,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            indicators: Indicator::ALL.to_vec(),
            frequency: ANNUAL.to_string(),
            breakdowns: BreakdownFilter::default(),
            status_priority: StatusPriority::default(),
        }
    }
}

/// Value written for a region-year total when no member reported the measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EmptyTotal {
    /// A sum over no values is `0.0`.
    #[default]
    Zero,
    /// Leave the total empty.
    Null,
}

/// Options controlling regional aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AggregateOptions {
    /// Keep aggregate geographies (World, continental totals) in the input.
    ///
    /// Diagnostic only: an aggregate that falls inside a region is counted on
    /// top of its member countries.
    pub include_aggregates: bool,
    pub empty_total: EmptyTotal,
}

impl AggregateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_include_aggregates(mut self, enable: bool) -> Self {
        self.include_aggregates = enable;
        self
    }

    #[must_use]
    pub fn with_empty_total(mut self, empty_total: EmptyTotal) -> Self {
        self.empty_total = empty_total;
        self
    }
}
