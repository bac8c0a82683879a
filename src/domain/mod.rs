//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the model family enum and fitted-model variants
//! - raw samples and plot geometry (`Sample`, `AxisRange`)
//! - run configuration (`FitConfig`) and outputs (`Residual`, `TrendFile`)

pub mod types;

pub use types::*;
