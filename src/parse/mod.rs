//! Parsing module for chord charts
//!
//! Turns chart text into the `models` document, surfacing structural
//! and note-spelling errors.

pub mod grammar;

pub use grammar::*;
