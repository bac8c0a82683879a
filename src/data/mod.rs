//! Sample acquisition.
//!
//! - built-in demo datasets per family (`defaults`)
//! - whitespace-separated x/y text parsing (`parse`)
//! - CSV ingest with row-level validation (`ingest`)

pub mod defaults;
pub mod ingest;
pub mod parse;

pub use defaults::*;
pub use ingest::*;
pub use parse::*;
