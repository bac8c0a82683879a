//! Discretize a fitted model into an ordered point sequence for rendering.
//!
//! Sampling strategy differs per family and is inherited behavior:
//!
//! - linear: the exact 2-point segment at the axis boundaries
//! - quadratic: 100-step sweep across the x-range (up to 101 points)
//! - exponential: one point per *original sample x*, not an axis sweep, so
//!   the trendline is only guaranteed accurate at the data positions
//! - power: sweep like quadratic, silently skipping x ≤ 0 where the model
//!   is undefined

use crate::domain::{AxisRange, FittedModel, Sample};

/// Number of sweep increments for the non-linear axis sweeps.
const SWEEP_STEPS: usize = 100;

/// Produce the ordered trendline points for the model over the axis range.
pub fn sample_curve(model: &FittedModel, range: &AxisRange, samples: &[Sample]) -> Vec<(f64, f64)> {
    match model {
        FittedModel::Linear { .. } => vec![
            (range.min_x, model.eval(range.min_x)),
            (range.max_x, model.eval(range.max_x)),
        ],
        FittedModel::Quadratic { .. } => sweep(model, range, |_| true),
        FittedModel::Exponential { .. } => {
            samples.iter().map(|s| (s.x, model.eval(s.x))).collect()
        }
        FittedModel::Power { .. } => sweep(model, range, |x| x > 0.0),
    }
}

/// Sweep from `min_x` in 100 equal increments, keeping points that pass
/// `keep`. The accumulating step means the final point may drift slightly
/// past or short of `max_x`; that drift is accepted rather than forcing
/// exact endpoint inclusion.
fn sweep(model: &FittedModel, range: &AxisRange, keep: impl Fn(f64) -> bool) -> Vec<(f64, f64)> {
    let step = (range.max_x - range.min_x) / SWEEP_STEPS as f64;
    let mut out = Vec::with_capacity(SWEEP_STEPS + 1);
    let mut x = range.min_x;
    while x <= range.max_x {
        if keep(x) {
            out.push((x, model.eval(x)));
        }
        x += step;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min_x: f64, max_x: f64) -> AxisRange {
        AxisRange {
            min_x,
            max_x,
            min_y: 0.0,
            max_y: 1.0,
        }
    }

    #[test]
    fn linear_curve_is_exactly_two_endpoint_points() {
        let model = FittedModel::Linear { slope: 2.0, intercept: 1.0 };
        let curve = sample_curve(&model, &range(-1.0, 3.0), &[]);
        assert_eq!(curve.len(), 2);
        assert_eq!(curve[0], (-1.0, -1.0));
        assert_eq!(curve[1], (3.0, 7.0));
    }

    #[test]
    fn quadratic_curve_sweeps_up_to_101_points() {
        let model = FittedModel::Quadratic { a: 1.0, b: 0.0, c: 0.0 };
        let r = range(-2.0, 2.0);
        let curve = sample_curve(&model, &r, &[]);

        assert!(curve.len() >= 100 && curve.len() <= 101, "got {}", curve.len());
        assert_eq!(curve[0].0, r.min_x);
        for &(x, y) in &curve {
            assert!((y - x * x).abs() < 1e-12);
        }
        // Uniform steps of (max−min)/100.
        let step = (r.max_x - r.min_x) / 100.0;
        assert!((curve[1].0 - (r.min_x + step)).abs() < 1e-12);
    }

    #[test]
    fn exponential_curve_evaluates_at_original_sample_positions() {
        let model = FittedModel::Exponential { a: 2.0, b: 0.5, x_mean: 2.0 };
        let samples = vec![
            Sample::new(0.0, 1.0),
            Sample::new(1.0, 1.0),
            Sample::new(4.0, 1.0),
        ];
        let curve = sample_curve(&model, &range(-10.0, 10.0), &samples);

        assert_eq!(curve.len(), samples.len());
        for (point, s) in curve.iter().zip(samples.iter()) {
            assert_eq!(point.0, s.x);
            assert!((point.1 - model.eval(s.x)).abs() < 1e-12);
        }
    }

    #[test]
    fn power_curve_skips_non_positive_x() {
        let model = FittedModel::Power { a: 3.0, b: 2.0 };
        let curve = sample_curve(&model, &range(-1.0, 1.0), &[]);

        assert!(!curve.is_empty());
        assert!(curve.len() < 101);
        for &(x, _) in &curve {
            assert!(x > 0.0, "kept an undefined point at x = {x}");
        }
    }

    #[test]
    fn power_curve_is_empty_when_range_is_entirely_non_positive() {
        let model = FittedModel::Power { a: 1.0, b: 1.0 };
        let curve = sample_curve(&model, &range(-5.0, -1.0), &[]);
        assert!(curve.is_empty());
    }
}
