//! Chord Chart WASM API
//!
//! JavaScript-facing wrappers around the pure chart functions. The core
//! never depends on this module; it only adapts inputs, errors and logging
//! to a wasm host.
//!
//! # Module Structure
//!
//! - `helpers`: lazy console/panic-hook setup
//! - `types`: `ValidationError`, the exception class thrown to JavaScript
//! - `chart`: `validateChart`, `transposeChart`, `parseChart`

pub mod chart;
pub mod helpers;
pub mod types;

pub use chart::{parse_chart, transpose_chart, validate_chart};
pub use types::ValidationError;
