//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting
//! - exported to JSON/CSV
//! - reloaded later for plotting or comparisons

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The functional form assumed for the fit.
///
/// This is a closed enumeration: an unrecognized family is a parse error at
/// the CLI/JSON boundary, never a silent fallthrough to a default model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModelFamily {
    Linear,
    Quadratic,
    Exponential,
    Power,
}

impl ModelFamily {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            ModelFamily::Linear => "linear",
            ModelFamily::Quadratic => "quadratic",
            ModelFamily::Exponential => "exponential",
            ModelFamily::Power => "power",
        }
    }

    /// Legend label for the trendline layer.
    pub fn trendline_label(self) -> &'static str {
        match self {
            ModelFamily::Linear => "Linear Trendline",
            ModelFamily::Quadratic => "Quadratic Trendline",
            ModelFamily::Exponential => "Exponential Trendline",
            ModelFamily::Power => "Power Trendline",
        }
    }
}

impl std::fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One observed (x, y) pair.
///
/// Samples are stored pairwise, so the `len(xs) == len(ys)` invariant is
/// structural: mismatched sequences are rejected at the parsing boundary and
/// cannot reach the fitter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Fitted model parameters, one variant per family.
///
/// The variant carries exactly that family's coefficients, so a caller can
/// never read a coefficient the model does not have.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "lowercase")]
pub enum FittedModel {
    Linear { slope: f64, intercept: f64 },
    Quadratic { a: f64, b: f64, c: f64 },
    /// `y = a·e^(b·(x − x_mean))`. The fit is performed on x shifted by its
    /// mean to stabilize the log-linear solve, and the shift is part of the
    /// model, not an implementation detail.
    Exponential { a: f64, b: f64, x_mean: f64 },
    Power { a: f64, b: f64 },
}

impl FittedModel {
    pub fn family(&self) -> ModelFamily {
        match self {
            FittedModel::Linear { .. } => ModelFamily::Linear,
            FittedModel::Quadratic { .. } => ModelFamily::Quadratic,
            FittedModel::Exponential { .. } => ModelFamily::Exponential,
            FittedModel::Power { .. } => ModelFamily::Power,
        }
    }

    /// Evaluate the fitted curve at `x`.
    ///
    /// The power model is undefined for `x <= 0`; the sampler filters those
    /// positions out before calling `eval`.
    pub fn eval(&self, x: f64) -> f64 {
        match *self {
            FittedModel::Linear { slope, intercept } => slope * x + intercept,
            FittedModel::Quadratic { a, b, c } => a * x * x + b * x + c,
            FittedModel::Exponential { a, b, x_mean } => a * (b * (x - x_mean)).exp(),
            FittedModel::Power { a, b } => a * x.powf(b),
        }
    }
}

/// Padded axis bounds for the chart.
///
/// Invariant: `min_x < max_x` and `min_y < max_y` for any non-empty sample
/// set with finite values (degenerate single-value spans get a fallback
/// padding of 1.0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

/// Summary stats about the samples actually used for fitting.
#[derive(Debug, Clone)]
pub struct SampleStats {
    pub n: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// A per-sample fitted result (used for exports).
#[derive(Debug, Clone)]
pub struct Residual {
    pub sample: Sample,
    pub y_fit: f64,
    pub residual: f64,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct FitConfig {
    pub family: ModelFamily,

    /// Use the built-in dataset for the chosen family.
    pub use_default: bool,
    /// Whitespace-separated x values (ignored when `use_default`).
    pub x_text: Option<String>,
    /// Whitespace-separated y values (ignored when `use_default`).
    pub y_text: Option<String>,
    /// CSV file with `x`/`y` columns (takes precedence over the text fields).
    pub csv_path: Option<PathBuf>,

    /// Floor/ceil the padded axis bounds to integers.
    pub whole_number_axes: bool,
    /// Round report values to 2 decimals before formatting.
    pub use_rounding: bool,

    pub x_label: String,
    pub y_label: String,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_results: Option<PathBuf>,
    pub export_trend: Option<PathBuf>,
}

/// A saved trend file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendFile {
    pub tool: String,
    pub family: ModelFamily,
    pub label: String,
    pub x_label: String,
    pub y_label: String,
    /// `None` when the fit was degenerate (scatter only, no trendline).
    pub model: Option<FittedModel>,
    pub axis: AxisRange,
    pub samples: Vec<Sample>,
    pub curve: CurveGrid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveGrid {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl CurveGrid {
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        Self {
            x: points.iter().map(|&(x, _)| x).collect(),
            y: points.iter().map(|&(_, y)| y).collect(),
        }
    }

    pub fn to_points(&self) -> Vec<(f64, f64)> {
        self.x.iter().zip(self.y.iter()).map(|(&x, &y)| (x, y)).collect()
    }
}

/// Compute summary stats, or `None` if any value is non-finite.
pub fn compute_stats(samples: &[Sample]) -> Option<SampleStats> {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for s in samples {
        x_min = x_min.min(s.x);
        x_max = x_max.max(s.x);
        y_min = y_min.min(s.y);
        y_max = y_max.max(s.y);
    }

    if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
        return None;
    }

    Some(SampleStats {
        n: samples.len(),
        x_min,
        x_max,
        y_min,
        y_max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_matches_each_family() {
        let lin = FittedModel::Linear { slope: 2.0, intercept: 1.0 };
        assert!((lin.eval(3.0) - 7.0).abs() < 1e-12);

        let quad = FittedModel::Quadratic { a: 2.0, b: 3.0, c: 1.0 };
        assert!((quad.eval(2.0) - 15.0).abs() < 1e-12);

        let exp = FittedModel::Exponential { a: 2.0, b: 0.5, x_mean: 1.0 };
        assert!((exp.eval(1.0) - 2.0).abs() < 1e-12);

        let pow = FittedModel::Power { a: 3.0, b: 2.0 };
        assert!((pow.eval(4.0) - 48.0).abs() < 1e-9);
    }

    #[test]
    fn trend_file_model_tag_round_trips() {
        let model = FittedModel::Exponential { a: 2.0, b: 0.5, x_mean: 2.0 };
        let json = serde_json::to_string(&model).unwrap();
        assert!(json.contains("\"family\":\"exponential\""));
        let back: FittedModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, model);
    }

    #[test]
    fn compute_stats_rejects_non_finite() {
        let samples = vec![Sample::new(0.0, f64::NAN)];
        assert!(compute_stats(&samples).is_none());
    }
}
