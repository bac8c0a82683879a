//! Padded axis bounds for the scatter + trendline chart.

use crate::domain::{AxisRange, Sample};

/// Fraction of the x-span added as margin on every side.
const PAD_FRAC: f64 = 0.05;

/// Fallback padding when all x values coincide (zero span).
const ZERO_SPAN_PAD: f64 = 1.0;

/// Compute padded axis bounds for the samples.
///
/// The padding is 5% of the x-span, or 1.0 when the span is zero, and the
/// same x-derived padding is applied to the y axis as well. The y axis
/// reusing the x padding is inherited behavior; keep it unless the rendered
/// output is allowed to change.
///
/// When `whole_number_mode` is set, the padded mins are floored and maxes
/// are ceiled so every bound lands on an integer.
pub fn axis_range(samples: &[Sample], whole_number_mode: bool) -> AxisRange {
    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for s in samples {
        x_min = x_min.min(s.x);
        x_max = x_max.max(s.x);
        y_min = y_min.min(s.y);
        y_max = y_max.max(s.y);
    }

    let span = x_max - x_min;
    let padding = if span == 0.0 { ZERO_SPAN_PAD } else { PAD_FRAC * span };

    let mut range = AxisRange {
        min_x: x_min - padding,
        max_x: x_max + padding,
        min_y: y_min - padding,
        max_y: y_max + padding,
    };

    if whole_number_mode {
        range.min_x = range.min_x.floor();
        range.max_x = range.max_x.ceil();
        range.min_y = range.min_y.floor();
        range.max_y = range.max_y.ceil();
    }

    range
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(xs: &[f64], ys: &[f64]) -> Vec<Sample> {
        xs.iter().zip(ys.iter()).map(|(&x, &y)| Sample::new(x, y)).collect()
    }

    #[test]
    fn zero_span_uses_fallback_padding() {
        let s = samples(&[1.0, 1.0, 1.0], &[2.0, 3.0, 4.0]);
        let r = axis_range(&s, false);
        assert_eq!(r.min_x, 0.0);
        assert_eq!(r.max_x, 2.0);
    }

    #[test]
    fn y_axis_reuses_x_derived_padding() {
        // x span = 10 → padding 0.5; y span = 1000, but y still pads by 0.5.
        let s = samples(&[0.0, 10.0], &[0.0, 1000.0]);
        let r = axis_range(&s, false);
        assert!((r.min_x - -0.5).abs() < 1e-12);
        assert!((r.max_x - 10.5).abs() < 1e-12);
        assert!((r.min_y - -0.5).abs() < 1e-12);
        assert!((r.max_y - 1000.5).abs() < 1e-12);
    }

    #[test]
    fn whole_number_mode_snaps_to_integers() {
        let s = samples(&[1.3, 9.7], &[1.3, 9.7]);
        let r = axis_range(&s, true);

        for v in [r.min_x, r.max_x, r.min_y, r.max_y] {
            assert_eq!(v, v.trunc(), "bound {v} is not an integer");
        }
        assert!(r.min_x <= 1.3 && r.max_x >= 9.7);
        assert!(r.min_y <= 1.3 && r.max_y >= 9.7);
    }

    #[test]
    fn bounds_strictly_contain_the_data() {
        let s = samples(&[-3.0, 5.0], &[2.0, 8.0]);
        let r = axis_range(&s, false);
        assert!(r.min_x < -3.0 && r.max_x > 5.0);
        assert!(r.min_y < 2.0 && r.max_y > 8.0);
    }
}
