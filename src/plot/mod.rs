//! Plot geometry and terminal rendering.
//!
//! - `range`: padded axis bounds (Axis Ranger)
//! - `sampler`: discretized trendline points (Curve Sampler)
//! - `ascii`: deterministic character-grid rendering for the CLI

pub mod ascii;
pub mod range;
pub mod sampler;

pub use ascii::*;
pub use range::*;
pub use sampler::*;
