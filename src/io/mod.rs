//! File outputs: saved trend JSON and per-sample results CSV.

pub mod export;
pub mod trend;

pub use export::*;
pub use trend::*;
