//! Data model for the UNCTAD digital services trade pipeline.
//!
//! This crate holds the typed records that flow between pipeline stages and
//! the static configuration tables the stages are parameterised by:
//!
//! - **columns**: Source and output column names
//! - **indicator**: Tracked indicators and their public measure names
//! - **status**: Observation status ranking used for duplicate resolution
//! - **records**: `RawObservation`, `PanelRow`, `RegionAggregateRow`
//! - **region**: Region membership sets and aggregate-geography exclusions
//! - **options**: Processing options for both stages

#![deny(unsafe_code)]

pub mod columns;
pub mod error;
pub mod indicator;
pub mod options;
pub mod records;
pub mod region;
pub mod status;

pub use error::{RegionConfigError, Result};
pub use indicator::Indicator;
pub use options::{AggregateOptions, BreakdownFilter, EmptyTotal, PanelOptions};
pub use records::{PanelRow, RawObservation, RegionAggregateRow};
pub use region::{
    AggregateExclusions, RegionConfig, RegionDefinition, RegionEntry, RegionSet, load_regions,
};
pub use status::StatusPriority;
