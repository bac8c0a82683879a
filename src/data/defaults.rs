//! Built-in demo datasets, one per model family.
//!
//! Each dataset is shaped like its family (noisy linear decline, parabola,
//! exponential growth, near-perfect square law) so a first run produces a
//! sensible-looking fit.

use crate::domain::{ModelFamily, Sample};

/// The built-in dataset for the given family.
pub fn default_samples(family: ModelFamily) -> Vec<Sample> {
    let (xs, ys): (&[f64], &[f64]) = match family {
        ModelFamily::Linear => (
            &[0.0, 3.0, 5.0, 6.0, 7.0, 10.0, 12.0, 13.0, 15.0, 18.0],
            &[8.2, 7.5, 7.0, 6.5, 7.2, 6.1, 6.8, 5.5, 5.8, 5.2],
        ),
        ModelFamily::Quadratic => (
            &[-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
            &[9.2, 4.1, 1.1, 0.2, 1.1, 4.2, 9.1, 16.0, 25.1],
        ),
        ModelFamily::Exponential => (
            &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
            &[2.1, 5.4, 14.8, 40.2, 109.6, 298.1],
        ),
        ModelFamily::Power => (
            &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0],
            &[1.1, 4.2, 9.1, 16.2, 25.1, 36.2, 49.1, 64.2, 81.1, 100.2],
        ),
    };

    xs.iter().zip(ys.iter()).map(|(&x, &y)| Sample::new(x, y)).collect()
}
