//! The shared fit pipeline used by `fit`, `report`, and the TUI.
//!
//! Stages: resolve samples → fit → axis range → curve sampling → residuals →
//! report. A degenerate fit (singular system) is a valid terminal outcome:
//! the model is withheld, the curve is empty, and the scatter and report
//! still render. Invalid input aborts the run instead.

use crate::data;
use crate::domain::{
    compute_stats, AxisRange, FitConfig, FittedModel, ModelFamily, Residual, Sample, SampleStats,
    TrendFile,
};
use crate::error::{AppError, FitError};
use crate::fit::fit;
use crate::io::TREND_TOOL_TAG;
use crate::plot::{axis_range, sample_curve};
use crate::report::render_report;

/// Everything one run produces.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub samples: Vec<Sample>,
    pub stats: SampleStats,
    pub family: ModelFamily,
    /// `None` when the fit was degenerate.
    pub model: Option<FittedModel>,
    /// The degenerate condition, when there is one.
    pub degenerate: Option<String>,
    pub axis: AxisRange,
    pub curve: Vec<(f64, f64)>,
    pub residuals: Vec<Residual>,
    pub report: String,
    /// Non-fatal notes (e.g. skipped CSV rows).
    pub warnings: Vec<String>,
}

/// Run the full pipeline for the given configuration.
pub fn run_fit(config: &FitConfig) -> Result<RunOutput, AppError> {
    let (samples, warnings) = resolve_samples(config)?;

    let (model, degenerate) = match fit(&samples, config.family) {
        Ok(model) => (Some(model), None),
        Err(FitError::DegenerateFit(reason)) => (None, Some(reason.to_string())),
        Err(err @ FitError::InvalidInput(_)) => return Err(err.into()),
    };

    // The fitter has already rejected empty or non-finite input.
    let stats = compute_stats(&samples)
        .ok_or_else(|| AppError::new(4, "Sample stats unavailable after validation."))?;

    let axis = axis_range(&samples, config.whole_number_axes);
    let curve = match &model {
        Some(m) => sample_curve(m, &axis, &samples),
        None => Vec::new(),
    };

    let residuals = match &model {
        Some(m) => samples
            .iter()
            .map(|&sample| {
                let y_fit = m.eval(sample.x);
                Residual { sample, y_fit, residual: sample.y - y_fit }
            })
            .collect(),
        None => Vec::new(),
    };

    let report = render_report(
        &samples,
        config.family,
        model.as_ref(),
        degenerate.as_deref(),
        config.use_rounding,
    );

    Ok(RunOutput {
        samples,
        stats,
        family: config.family,
        model,
        degenerate,
        axis,
        curve,
        residuals,
        report,
        warnings,
    })
}

/// Resolve the sample source: CSV file, raw text fields, or the built-in
/// dataset, in that order of precedence.
fn resolve_samples(config: &FitConfig) -> Result<(Vec<Sample>, Vec<String>), AppError> {
    if let Some(path) = &config.csv_path {
        let ingested = data::load_samples_csv(path)?;
        let warnings = ingested
            .row_errors
            .iter()
            .map(|e| format!("{}:{}: {}", path.display(), e.line, e.message))
            .collect();
        return Ok((ingested.samples, warnings));
    }

    if let (Some(x_text), Some(y_text)) = (&config.x_text, &config.y_text) {
        return Ok((data::parse_pairs(x_text, y_text)?, Vec::new()));
    }

    if config.use_default || (config.x_text.is_none() && config.y_text.is_none()) {
        return Ok((data::default_samples(config.family), Vec::new()));
    }

    Err(AppError::new(
        2,
        "Both -x and -y must be given (or use --csv / --use-default).",
    ))
}

/// Package a run as a portable trend file.
pub fn build_trend_file(config: &FitConfig, run: &RunOutput) -> TrendFile {
    TrendFile {
        tool: TREND_TOOL_TAG.to_string(),
        family: run.family,
        label: run.family.trendline_label().to_string(),
        x_label: config.x_label.clone(),
        y_label: config.y_label.clone(),
        model: run.model,
        axis: run.axis,
        samples: run.samples.clone(),
        curve: crate::domain::CurveGrid::from_points(&run.curve),
    }
}
