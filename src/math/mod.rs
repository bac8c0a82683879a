//! Mathematical utilities: shared power sums for the closed-form solvers.

pub mod moments;

pub use moments::*;
