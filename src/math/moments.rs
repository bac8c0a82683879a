//! One-pass accumulation of the power sums shared by every model family.
//!
//! All four fits are closed-form least squares over moment sums (Σx, Σy,
//! Σxy, Σx², ... up to Σx⁴ for the quadratic normal equations). Computing
//! them once per call keeps the per-family solvers free of loops and lets
//! the report reuse the same numbers it prints.

use crate::domain::Sample;

/// Power sums of a sample set, up to the 4th x-power.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    pub n: usize,
    pub sum_x: f64,
    pub sum_y: f64,
    pub sum_xy: f64,
    pub sum_x2: f64,
    pub sum_y2: f64,
    pub sum_x3: f64,
    pub sum_x4: f64,
    pub sum_x2y: f64,
}

impl Moments {
    pub fn of(samples: &[Sample]) -> Self {
        let mut m = Moments {
            n: samples.len(),
            sum_x: 0.0,
            sum_y: 0.0,
            sum_xy: 0.0,
            sum_x2: 0.0,
            sum_y2: 0.0,
            sum_x3: 0.0,
            sum_x4: 0.0,
            sum_x2y: 0.0,
        };

        for s in samples {
            let x2 = s.x * s.x;
            m.sum_x += s.x;
            m.sum_y += s.y;
            m.sum_xy += s.x * s.y;
            m.sum_x2 += x2;
            m.sum_y2 += s.y * s.y;
            m.sum_x3 += x2 * s.x;
            m.sum_x4 += x2 * x2;
            m.sum_x2y += x2 * s.y;
        }

        m
    }

    pub fn n_f64(&self) -> f64 {
        self.n as f64
    }

    pub fn mean_x(&self) -> f64 {
        self.sum_x / self.n_f64()
    }

    pub fn mean_y(&self) -> f64 {
        self.sum_y / self.n_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moments_of_small_set() {
        let samples = vec![
            Sample::new(1.0, 2.0),
            Sample::new(2.0, 3.0),
            Sample::new(3.0, 5.0),
        ];
        let m = Moments::of(&samples);

        assert_eq!(m.n, 3);
        assert!((m.sum_x - 6.0).abs() < 1e-12);
        assert!((m.sum_y - 10.0).abs() < 1e-12);
        assert!((m.sum_xy - 23.0).abs() < 1e-12);
        assert!((m.sum_x2 - 14.0).abs() < 1e-12);
        assert!((m.sum_y2 - 38.0).abs() < 1e-12);
        assert!((m.sum_x3 - 36.0).abs() < 1e-12);
        assert!((m.sum_x4 - 98.0).abs() < 1e-12);
        assert!((m.sum_x2y - 59.0).abs() < 1e-12);
        assert!((m.mean_x() - 2.0).abs() < 1e-12);
    }
}
