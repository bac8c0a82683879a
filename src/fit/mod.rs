//! Model fitting.
//!
//! One closed-form solver per family, dispatched over the `ModelFamily`
//! enum. No side effects: every call recomputes from the raw samples.

pub mod fitter;

pub use fitter::*;
