//! Chord chart validation and transposition
//!
//! A chart is plain text made of bar lines:
//!
//! ```text
//! | A/E E | E |
//! | C#m |
//! ```
//!
//! [`validate_chart`] parses a chart and re-emits it with canonical spacing;
//! [`transpose_chart`] additionally shifts every root and bass note from one
//! key to another. Both are pure functions with no shared state and can be
//! called from any thread.
//!
//! ```
//! assert_eq!(chord_chart::validate_chart("| C|").unwrap(), "| C |");
//! assert_eq!(chord_chart::transpose_chart("| D |", "D", "Gb").unwrap(), "| Gb |");
//! ```

pub mod api;
pub mod errors;
pub mod models;
pub mod parse;
pub mod renderers;
pub mod transposition;

// Re-export commonly used types
pub use errors::{ChartError, ErrorKind, Result};
pub use models::*;
pub use transposition::Transpose;

/// Parse `chart` and return it with canonical spacing
pub fn validate_chart(chart: &str) -> Result<String> {
    log::debug!("validate_chart called");
    let document = parse::parse_chart(chart)?;
    Ok(renderers::normalize(&document))
}

/// Transpose `chart` from `current_key` to `new_key`
///
/// Keys are single notes (`"E"`, `"Db"`, `"f#"`). Black-key results are
/// spelled with the accidental used in `new_key`; a natural `new_key`
/// spells them with sharps.
pub fn transpose_chart(chart: &str, current_key: &str, new_key: &str) -> Result<String> {
    log::debug!("transpose_chart called: {} -> {}", current_key, new_key);
    let from_key = parse::parse_note(current_key)?;
    let to_key = parse::parse_note(new_key)?;
    let document = parse::parse_chart(chart)?;
    let transposed = transposition::transpose_between_keys(&document, &from_key, &to_key);
    Ok(renderers::normalize(&transposed))
}
