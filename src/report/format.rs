//! Plain-text statistics report.
//!
//! Layout, in order:
//! 1. indexed table of X, Y, X², Y², XY
//! 2. Σ-lines and n
//! 3. Pearson r / r² with sign and strength sentences
//! 4. mean and population σ of Y, 2σ outlier listing
//! 5. the per-family fitted-equation block
//!
//! All values go through [`fmt_smart`], which mirrors shortest-round-trip
//! float formatting with an optional round-to-2-decimals display mode.

use std::fmt::Write;

use crate::domain::{FittedModel, ModelFamily, Sample};
use crate::math::Moments;

/// Shortest decimal representation of `v`, optionally rounded to 2 decimals
/// first. `12.0` prints as `12`, `0.25` as `0.25`.
pub fn fmt_smart(v: f64, use_rounding: bool) -> String {
    let v = if use_rounding { (v * 100.0).round() / 100.0 } else { v };
    format!("{v}")
}

/// Render the full statistics report.
///
/// `model` is `None` when the fit was degenerate; `degenerate_note` then
/// carries the condition to report in the equation block.
pub fn render_report(
    samples: &[Sample],
    family: ModelFamily,
    model: Option<&FittedModel>,
    degenerate_note: Option<&str>,
    use_rounding: bool,
) -> String {
    let m = Moments::of(samples);
    let mut out = String::new();

    write_sum_table(&mut out, samples, &m, use_rounding);
    write_correlation(&mut out, &m);
    write_dispersion(&mut out, samples, &m, use_rounding);
    write_equation_block(&mut out, samples, family, model, degenerate_note, use_rounding);

    out
}

fn write_sum_table(out: &mut String, samples: &[Sample], m: &Moments, use_rounding: bool) {
    let _ = writeln!(
        out,
        "{:<7} {:<10} {:<10} {:<12} {:<12} {:<12}",
        "Index", "X", "Y", "X^2", "Y^2", "XY"
    );
    for (i, s) in samples.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<7} {:<10} {:<10} {:<12} {:<12} {:<12}",
            i + 1,
            fmt_smart(s.x, use_rounding),
            fmt_smart(s.y, use_rounding),
            fmt_smart(s.x * s.x, use_rounding),
            fmt_smart(s.y * s.y, use_rounding),
            fmt_smart(s.x * s.y, use_rounding),
        );
    }

    let _ = writeln!(out, "\nΣx = {}", fmt_smart(m.sum_x, use_rounding));
    let _ = writeln!(out, "Σy = {}", fmt_smart(m.sum_y, use_rounding));
    let _ = writeln!(out, "Σx² = {}", fmt_smart(m.sum_x2, use_rounding));
    let _ = writeln!(out, "Σy² = {}", fmt_smart(m.sum_y2, use_rounding));
    let _ = writeln!(out, "Σxy = {}", fmt_smart(m.sum_xy, use_rounding));
    let _ = writeln!(out, "n = {}", m.n);
}

fn write_correlation(out: &mut String, m: &Moments) {
    let n = m.n_f64();
    let numerator = n * m.sum_xy - m.sum_x * m.sum_y;
    let term_x = n * m.sum_x2 - m.sum_x * m.sum_x;
    let term_y = n * m.sum_y2 - m.sum_y * m.sum_y;
    let denominator = term_x * term_y;

    if denominator == 0.0 {
        out.push_str("r is undefined (denominator for r is zero).\n");
        return;
    }

    let r = numerator / denominator.sqrt();
    let _ = writeln!(out, "r = {r:.4}");
    let _ = writeln!(out, "r² = {:.4}", r * r);

    if r > 0.0 {
        out.push_str("The correlation is positive.\n");
    } else if r < 0.0 {
        out.push_str("The correlation is negative.\n");
    } else {
        out.push_str("There is no pos/neg correlation.\n");
    }

    let abs_r = r.abs();
    let strength = if abs_r == 1.0 {
        "Perfect correlation."
    } else if abs_r >= 0.7 {
        "Strong correlation."
    } else if abs_r >= 0.5 {
        "Moderate correlation."
    } else if abs_r >= 0.3 {
        "Weak correlation."
    } else {
        "There is no spectrum correlation."
    };
    let _ = writeln!(out, "{strength}");
}

fn write_dispersion(out: &mut String, samples: &[Sample], m: &Moments, use_rounding: bool) {
    let mean_y = m.mean_y();
    let var_y = samples
        .iter()
        .map(|s| (s.y - mean_y) * (s.y - mean_y))
        .sum::<f64>()
        / m.n_f64();
    let std_dev_y = var_y.sqrt();

    let _ = writeln!(out, "\nMean of Y: {}", fmt_smart(mean_y, use_rounding));
    let _ = writeln!(
        out,
        "Standard Deviation of Y: {}",
        fmt_smart(std_dev_y, use_rounding)
    );

    let outliers: Vec<usize> = samples
        .iter()
        .enumerate()
        .filter(|(_, s)| (s.y - mean_y).abs() > 2.0 * std_dev_y)
        .map(|(i, _)| i)
        .collect();

    if outliers.is_empty() {
        out.push_str("No outliers detected.\n");
    } else {
        out.push_str("Outliers detected at the following indices (0-based):\n");
        for idx in outliers {
            let s = samples[idx];
            let _ = writeln!(
                out,
                "Index {idx}: X = {}, Y = {}",
                fmt_smart(s.x, use_rounding),
                fmt_smart(s.y, use_rounding)
            );
        }
    }
}

fn write_equation_block(
    out: &mut String,
    samples: &[Sample],
    family: ModelFamily,
    model: Option<&FittedModel>,
    degenerate_note: Option<&str>,
    use_rounding: bool,
) {
    match model {
        Some(&FittedModel::Linear { slope, intercept }) => {
            let _ = writeln!(
                out,
                "\nTrendline equation: y = {}x + {}",
                fmt_smart(slope, use_rounding),
                fmt_smart(intercept, use_rounding)
            );
        }
        Some(&FittedModel::Quadratic { a, b, c }) => {
            let vertex_x = -b / (2.0 * a);
            let vertex_y = a * vertex_x * vertex_x + b * vertex_x + c;
            let vertex_type = if a < 0.0 { "maximum" } else { "minimum" };
            let _ = writeln!(
                out,
                "\nQuadratic Trendline equation: y = {}x² + {}x + {}",
                fmt_smart(a, use_rounding),
                fmt_smart(b, use_rounding),
                fmt_smart(c, use_rounding)
            );
            let _ = writeln!(
                out,
                "Vertex: ({}, {}) - This is a {vertex_type}",
                fmt_smart(vertex_x, use_rounding),
                fmt_smart(vertex_y, use_rounding)
            );
        }
        Some(&FittedModel::Exponential { a, b, x_mean }) => {
            let _ = writeln!(
                out,
                "\nExponential equation: y = {}*e^({}*(x-{}))",
                fmt_smart(a, use_rounding),
                fmt_smart(b, use_rounding),
                fmt_smart(x_mean, use_rounding)
            );
            let _ = writeln!(
                out,
                "Solving for x: x = {} + ln(y/{})/{}",
                fmt_smart(x_mean, use_rounding),
                fmt_smart(a, use_rounding),
                fmt_smart(b, use_rounding)
            );
            if let Some(r2) = log_fit_r2(samples, LogAxes::ShiftedX { x_mean }) {
                let _ = writeln!(
                    out,
                    "r² for exponential fit: {}",
                    fmt_smart(r2, use_rounding)
                );
            }
        }
        Some(&FittedModel::Power { a, b }) => {
            let _ = writeln!(
                out,
                "\nPower equation: y = {}*x^{}",
                fmt_smart(a, use_rounding),
                fmt_smart(b, use_rounding)
            );
            if b != 0.0 {
                let _ = writeln!(
                    out,
                    "Solving for x: x = (y/{})^(1/{})",
                    fmt_smart(a, use_rounding),
                    fmt_smart(b, use_rounding)
                );
            }
            if let Some(r2) = log_fit_r2(samples, LogAxes::LogX) {
                let _ = writeln!(out, "r² for power fit: {}", fmt_smart(r2, use_rounding));
            }
        }
        None => {
            let note = degenerate_note.unwrap_or("no model");
            match family {
                // The linear block is simply omitted when there is no model.
                ModelFamily::Linear => {}
                ModelFamily::Quadratic => {
                    let _ = writeln!(
                        out,
                        "\nCould not calculate quadratic regression ({note})."
                    );
                }
                other => {
                    let _ = writeln!(
                        out,
                        "\nCannot perform {} regression: {note}.",
                        other.display_name()
                    );
                }
            }
        }
    }
}

/// Which abscissa the log-domain correlation uses.
enum LogAxes {
    /// Exponential: x shifted by its mean vs. ln y.
    ShiftedX { x_mean: f64 },
    /// Power: ln x vs. ln y.
    LogX,
}

/// r² of the log-domain least-squares fit, or `None` when its correlation
/// denominator is not positive.
fn log_fit_r2(samples: &[Sample], axes: LogAxes) -> Option<f64> {
    let n = samples.len() as f64;
    let mut sum_u = 0.0;
    let mut sum_v = 0.0;
    let mut sum_uv = 0.0;
    let mut sum_u2 = 0.0;
    let mut sum_v2 = 0.0;

    for s in samples {
        let u = match axes {
            LogAxes::ShiftedX { x_mean } => s.x - x_mean,
            LogAxes::LogX => s.x.ln(),
        };
        let v = s.y.ln();
        sum_u += u;
        sum_v += v;
        sum_uv += u * v;
        sum_u2 += u * u;
        sum_v2 += v * v;
    }

    let term_u = n * sum_u2 - sum_u * sum_u;
    let term_v = n * sum_v2 - sum_v * sum_v;
    let denominator = term_u * term_v;
    if denominator > 0.0 {
        let r = (n * sum_uv - sum_u * sum_v) / denominator.sqrt();
        Some(r * r)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::fit;

    fn linear_samples() -> Vec<Sample> {
        vec![
            Sample::new(1.0, 3.0),
            Sample::new(2.0, 5.0),
            Sample::new(3.0, 7.0),
        ]
    }

    #[test]
    fn fmt_smart_drops_trailing_zeroes() {
        assert_eq!(fmt_smart(12.0, false), "12");
        assert_eq!(fmt_smart(0.25, false), "0.25");
        assert_eq!(fmt_smart(1.23456, true), "1.23");
        assert_eq!(fmt_smart(1.996, true), "2");
    }

    #[test]
    fn linear_report_contains_sums_and_equation() {
        let samples = linear_samples();
        let model = fit(&samples, ModelFamily::Linear).unwrap();
        let report = render_report(&samples, ModelFamily::Linear, Some(&model), None, false);

        assert!(report.contains("Σx = 6"));
        assert!(report.contains("Σy = 15"));
        assert!(report.contains("Σxy = 34"));
        assert!(report.contains("n = 3"));
        assert!(report.contains("r = 1.0000"));
        assert!(report.contains("Perfect correlation."));
        assert!(report.contains("Trendline equation: y = 2x + 1"));
    }

    #[test]
    fn undefined_r_when_all_y_equal() {
        let samples = vec![
            Sample::new(1.0, 5.0),
            Sample::new(2.0, 5.0),
            Sample::new(3.0, 5.0),
        ];
        let report = render_report(&samples, ModelFamily::Linear, None, None, false);
        assert!(report.contains("r is undefined (denominator for r is zero)."));
    }

    #[test]
    fn quadratic_report_labels_vertex() {
        let samples: Vec<Sample> = (-3..=3)
            .map(|x| {
                let x = x as f64;
                Sample::new(x, x * x - 2.0 * x + 3.0)
            })
            .collect();
        let model = fit(&samples, ModelFamily::Quadratic).unwrap();
        let report = render_report(&samples, ModelFamily::Quadratic, Some(&model), None, true);

        assert!(report.contains("Quadratic Trendline equation:"));
        assert!(report.contains("This is a minimum"));
        assert!(report.contains("Vertex: (1, 2)"));
    }

    #[test]
    fn degenerate_quadratic_notes_the_condition() {
        let report = render_report(
            &linear_samples(),
            ModelFamily::Quadratic,
            None,
            Some("determinant is zero"),
            false,
        );
        assert!(report.contains("Could not calculate quadratic regression (determinant is zero)."));
    }

    #[test]
    fn exponential_report_prints_inverse_and_r2() {
        let samples: Vec<Sample> = (0..5)
            .map(|x| {
                let x = x as f64;
                Sample::new(x, 2.0 * (0.5 * x).exp())
            })
            .collect();
        let model = fit(&samples, ModelFamily::Exponential).unwrap();
        let report = render_report(&samples, ModelFamily::Exponential, Some(&model), None, true);

        assert!(report.contains("Exponential equation: y ="));
        assert!(report.contains("Solving for x: x ="));
        assert!(report.contains("r² for exponential fit: 1"));
    }

    #[test]
    fn outlier_listing_flags_far_point() {
        let mut samples: Vec<Sample> = (0..20).map(|i| Sample::new(i as f64, 5.0 + 0.01 * i as f64)).collect();
        samples.push(Sample::new(20.0, 50.0));
        let report = render_report(&samples, ModelFamily::Linear, None, None, false);
        assert!(report.contains("Outliers detected at the following indices (0-based):"));
        assert!(report.contains("Index 20:"));
    }
}
