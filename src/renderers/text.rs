//! Canonical text rendering
//!
//! Output rules:
//! - exactly one space after and before every stripe around a non-empty bar
//! - an empty bar renders as `| |`
//! - chords in a bar are joined by a single space
//! - lines are joined by a single `\n`
//!
//! Rendering a parsed chart and parsing the result again yields the same
//! text, so normalization is idempotent.

use crate::models::{Bar, Chart, Chord, Line};

pub fn render_chord(chord: &Chord) -> String {
    let mut out = chord.root.to_string();
    out.push_str(&chord.suffix);
    if let Some(bass) = &chord.bass {
        out.push('/');
        out.push_str(&bass.to_string());
    }
    out
}

pub fn render_bar(bar: &Bar) -> String {
    bar.chords
        .iter()
        .map(render_chord)
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn render_line(line: &Line) -> String {
    let mut out = String::from("|");
    for bar in &line.bars {
        if !bar.is_empty() {
            out.push(' ');
            out.push_str(&render_bar(bar));
        }
        out.push_str(" |");
    }
    out
}

/// Serialize a whole chart to canonical text
pub fn normalize(chart: &Chart) -> String {
    chart
        .lines
        .iter()
        .map(render_line)
        .collect::<Vec<String>>()
        .join("\n")
        .trim()
        .to_string()
}
