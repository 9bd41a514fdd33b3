//! Renderers module
//!
//! Serializes chart documents back to canonical text.

pub mod text;

pub use text::normalize;
