//! Recursive descent parser for chord charts
//!
//! ```text
//! Chart := Line ( "\n" Line )*
//! Line  := "|" Bar ( "|" Bar )* "|"
//! Bar   := WS* ( Chord ( WS+ Chord )* )? WS*
//! Chord := Root Suffix? ( "/" Bass )?
//! ```
//!
//! Parsing is fail-fast: the first error (top-to-bottom, left-to-right,
//! root before suffix before bass) aborts the whole parse.

use crate::errors::{ChartError, Result};
use crate::models::{Accidental, Bar, Chart, Chord, Line, Natural, Note};

const STRIPE: char = '|';
const BASS_DELIMITER: char = '/';

/// Parse a whole chart. Blank lines are skipped.
pub fn parse_chart(text: &str) -> Result<Chart> {
    log::debug!("parse_chart: {} bytes", text.len());

    let lines = text
        .trim()
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect::<Result<Vec<Line>>>()
        .map_err(|err| {
            log::warn!("chart rejected: {}", err);
            err
        })?;

    Ok(Chart::new(lines))
}

/// Parse one bar line; it must start and end with a stripe once trimmed.
pub fn parse_line(text: &str) -> Result<Line> {
    let trimmed = text.trim();

    let inner = trimmed
        .strip_prefix(STRIPE)
        .ok_or_else(|| ChartError::BarLineShouldStartWithStripe(trimmed.to_string()))?;
    let inner = inner
        .strip_suffix(STRIPE)
        .ok_or_else(|| ChartError::BarLineShouldEndWithStripe(trimmed.to_string()))?;

    let bars = inner
        .split(STRIPE)
        .map(parse_bar)
        .collect::<Result<Vec<Bar>>>()?;

    Ok(Line::new(bars))
}

/// Parse the content between two stripes.
pub fn parse_bar(text: &str) -> Result<Bar> {
    let chords = text
        .split_whitespace()
        .map(parse_chord)
        .collect::<Result<Vec<Chord>>>()?;

    Ok(Bar::new(chords))
}

/// Parse a single chord token such as `C#m7/G#`.
pub fn parse_chord(token: &str) -> Result<Chord> {
    let (head, bass_text) = match token.split_once(BASS_DELIMITER) {
        Some((head, bass)) => (head, Some(bass)),
        None => (token, None),
    };

    let (root, suffix) = parse_root(head).map_err(|err| with_value(err, token))?;

    let bass = match bass_text {
        Some(bass) => Some(parse_note(bass)?),
        None => None,
    };

    Ok(Chord::new(root, suffix, bass))
}

/// Parse a standalone note (a key or a bass note): letter, optional
/// accidental, nothing else.
pub fn parse_note(text: &str) -> Result<Note> {
    let (note, rest) = parse_root(text)?;
    if !rest.is_empty() {
        return Err(ChartError::InvalidNote(text.to_string()));
    }
    Ok(note)
}

/// Split a leading note off `text`, returning the note and the untouched
/// remainder.
fn parse_root(text: &str) -> Result<(Note, &str)> {
    let mut chars = text.chars();

    let first = chars
        .next()
        .ok_or_else(|| ChartError::NoNatural(text.to_string()))?;
    let natural = parse_natural(first, text)?;
    let rest = chars.as_str();

    let (accidental, rest) = match rest.chars().next().and_then(Accidental::from_char) {
        Some(accidental) => (accidental, &rest[1..]),
        None => (Accidental::Natural, rest),
    };

    // A second accidental right after the first (C##, Dbb) is malformed.
    if accidental != Accidental::Natural
        && rest.chars().next().and_then(Accidental::from_char).is_some()
    {
        return Err(ChartError::InvalidNote(text.to_string()));
    }

    Ok((Note::new(natural, accidental), rest))
}

fn parse_natural(c: char, text: &str) -> Result<Natural> {
    match Natural::from_char(c) {
        Some(natural) => Ok(natural),
        None if c.is_ascii_alphabetic() => Err(ChartError::InvalidNatural(text.to_string())),
        None => Err(ChartError::NoNatural(text.to_string())),
    }
}

/// Re-point a root error at the whole chord token.
fn with_value(err: ChartError, token: &str) -> ChartError {
    let token = token.to_string();
    match err {
        ChartError::NoNatural(_) => ChartError::NoNatural(token),
        ChartError::InvalidNatural(_) => ChartError::InvalidNatural(token),
        ChartError::InvalidNote(_) => ChartError::InvalidNote(token),
        other => other,
    }
}
