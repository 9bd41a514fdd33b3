//! Chart document model
//!
//! Chart -> Line -> Bar -> Chord -> Note. Documents are built by the
//! parser, rewritten by the transposer and turned back into text by the
//! normalizer; nothing here outlives a single call.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ChartError;
use crate::models::note::Note;

/// Root note, verbatim suffix (quality/extension) and optional bass note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    pub root: Note,
    /// Never interpreted; "m7b5" stays "m7b5"
    pub suffix: String,
    pub bass: Option<Note>,
}

impl Chord {
    pub fn new(root: Note, suffix: impl Into<String>, bass: Option<Note>) -> Self {
        Self {
            root,
            suffix: suffix.into(),
            bass,
        }
    }
}

/// Chords between two stripes; an empty bar is a rest/repeat bar
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bar {
    pub chords: Vec<Chord>,
}

impl Bar {
    pub fn new(chords: Vec<Chord>) -> Self {
        Self { chords }
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub bars: Vec<Bar>,
}

impl Line {
    pub fn new(bars: Vec<Bar>) -> Self {
        Self { bars }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chart {
    pub lines: Vec<Line>,
}

impl Chart {
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }
}

// Display is the canonical (normalized) text form of each level.

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::renderers::text::render_chord(self))
    }
}

impl fmt::Display for Bar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::renderers::text::render_bar(self))
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::renderers::text::render_line(self))
    }
}

impl fmt::Display for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::renderers::text::normalize(self))
    }
}

impl FromStr for Chord {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_chord(s)
    }
}

impl FromStr for Bar {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_bar(s)
    }
}

impl FromStr for Line {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_line(s)
    }
}

impl FromStr for Chart {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_chart(s)
    }
}
