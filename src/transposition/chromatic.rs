/// Semitone-interval transposition with key-driven respelling
///
/// The interval is `(to - from) mod 12` on the pitch-class circle, so a
/// transposition is always expressed as a move *up* by 0..11 semitones.
/// Black-key results are spelled by the destination key: a key written
/// with `b` gives flats, with `#` gives sharps, a plain letter gives sharps.

use crate::models::{AccidentalStyle, Bar, Chart, Chord, Line, Note};

/// Produce a copy moved up by `interval` semitones and spelled with `style`
pub trait Transpose {
    fn transpose(&self, interval: u8, style: AccidentalStyle) -> Self;
}

impl Transpose for Note {
    fn transpose(&self, interval: u8, style: AccidentalStyle) -> Self {
        Note::spell(self.pitch_class().shift(interval), style)
    }
}

impl Transpose for Chord {
    fn transpose(&self, interval: u8, style: AccidentalStyle) -> Self {
        Chord::new(
            self.root.transpose(interval, style),
            self.suffix.clone(),
            self.bass.map(|bass| bass.transpose(interval, style)),
        )
    }
}

impl Transpose for Bar {
    fn transpose(&self, interval: u8, style: AccidentalStyle) -> Self {
        Bar::new(
            self.chords
                .iter()
                .map(|chord| chord.transpose(interval, style))
                .collect(),
        )
    }
}

impl Transpose for Line {
    fn transpose(&self, interval: u8, style: AccidentalStyle) -> Self {
        Line::new(
            self.bars
                .iter()
                .map(|bar| bar.transpose(interval, style))
                .collect(),
        )
    }
}

impl Transpose for Chart {
    fn transpose(&self, interval: u8, style: AccidentalStyle) -> Self {
        Chart::new(
            self.lines
                .iter()
                .map(|line| line.transpose(interval, style))
                .collect(),
        )
    }
}

/// Move `chart` from `from_key` to `to_key`
pub fn transpose_between_keys(chart: &Chart, from_key: &Note, to_key: &Note) -> Chart {
    let interval = from_key.semitones_to(to_key);
    let style = to_key.style();
    log::debug!(
        "transposing {} -> {}: +{} semitones, {:?} spelling",
        from_key,
        to_key,
        interval,
        style
    );
    chart.transpose(interval, style)
}
