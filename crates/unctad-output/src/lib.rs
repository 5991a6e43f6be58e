//! Output writers for the pipeline tables.
//!
//! Tables are written as header-row CSV; empty measures become empty cells.

mod common;
mod csv;

pub use common::ensure_parent_dir;
pub use csv::write_csv;
