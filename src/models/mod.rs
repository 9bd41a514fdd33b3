//! Models module for chord charts
//!
//! Notes and pitch classes, and the chart document built from them.

pub mod chart;
pub mod note;

// Re-export commonly used types
pub use chart::{Bar, Chart, Chord, Line};
pub use note::{Accidental, AccidentalStyle, Natural, Note, PitchClass};
