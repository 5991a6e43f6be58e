//! CLI library components for the UNCTAD digital services trade pipeline.

pub mod logging;
pub mod pipeline;
