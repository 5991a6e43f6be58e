//! Digital services trade transforms.
//!
//! Two pure stages over in-memory tables:
//!
//! - **panel**: raw long-format UNCTAD_DE rows to one row per (iso3, year)
//!   with one unit-normalized column per indicator
//! - **regions**: panel rows to one row per (region, year) with summed
//!   totals and reporting counts
//!
//! `frame` converts between typed rows and Polars DataFrames. Neither stage
//! touches the filesystem.

mod error;
pub mod frame;
pub mod panel;
pub mod regions;

pub use error::{Result, TransformError};
pub use frame::{aggregate_frame, panel_frame, panel_rows_from_frame};
pub use panel::{
    PanelStats, build_country_year_panel, build_panel_rows, normalize_to_millions,
    observations_from_frame,
};
pub use regions::{
    aggregate_panel, aggregate_regions, build_region_year_aggregates, filter_countries_only,
};
