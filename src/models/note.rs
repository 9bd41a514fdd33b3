/// Note model: spelled notes, pitch classes and accidental styles
///
/// A `Note` is what the user wrote (letter + optional `#`/`b`), a
/// `PitchClass` is where it sounds on the 12-tone circle (C=0 .. B=11).
/// Two notes can share a pitch class (C# and Db are both 1) while still
/// being distinct spellings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ChartError;

/// Natural letter, valued by its pitch class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Natural {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Natural {
    /// Case-insensitive letter lookup
    pub fn from_char(c: char) -> Option<Natural> {
        match c.to_ascii_uppercase() {
            'C' => Some(Natural::C),
            'D' => Some(Natural::D),
            'E' => Some(Natural::E),
            'F' => Some(Natural::F),
            'G' => Some(Natural::G),
            'A' => Some(Natural::A),
            'B' => Some(Natural::B),
            _ => None,
        }
    }

    pub fn semitone(&self) -> u8 {
        match self {
            Natural::C => 0,
            Natural::D => 2,
            Natural::E => 4,
            Natural::F => 5,
            Natural::G => 7,
            Natural::A => 9,
            Natural::B => 11,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Natural::C => "C",
            Natural::D => "D",
            Natural::E => "E",
            Natural::F => "F",
            Natural::G => "G",
            Natural::A => "A",
            Natural::B => "B",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accidental {
    Natural,
    Sharp,
    Flat,
}

impl Accidental {
    /// Only `#` and `b` are accidentals; anything else is not.
    pub fn from_char(c: char) -> Option<Accidental> {
        match c {
            '#' => Some(Accidental::Sharp),
            'b' => Some(Accidental::Flat),
            _ => None,
        }
    }

    pub fn offset(&self) -> i8 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        }
    }

    /// Spelling convention implied by a key written with this accidental
    pub fn style(&self) -> AccidentalStyle {
        match self {
            Accidental::Sharp => AccidentalStyle::Sharp,
            Accidental::Flat => AccidentalStyle::Flat,
            Accidental::Natural => AccidentalStyle::Natural,
        }
    }
}

/// Sharp/flat convention used when respelling a pitch class.
///
/// `Natural` comes from keys spelled without an accidental (C, A, ...)
/// and respells black keys with sharps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccidentalStyle {
    Sharp,
    Flat,
    Natural,
}

/// Position on the 12-tone chromatic circle, always in `0..12`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PitchClass(u8);

impl TryFrom<u8> for PitchClass {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value < 12 {
            Ok(PitchClass(value))
        } else {
            Err(format!("Invalid pitch class: {} (must be 0-11)", value))
        }
    }
}

impl From<PitchClass> for u8 {
    fn from(pitch_class: PitchClass) -> u8 {
        pitch_class.0
    }
}

impl PitchClass {
    /// Wraps any semitone count into `0..12`
    pub fn new(semitones: i32) -> Self {
        PitchClass(semitones.rem_euclid(12) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Move up by `interval` semitones, wrapping at the octave
    pub fn shift(&self, interval: u8) -> Self {
        PitchClass::new(self.0 as i32 + interval as i32)
    }

    /// Upward distance from `self` to `other`, in `0..12`
    pub fn interval_to(&self, other: PitchClass) -> u8 {
        PitchClass::new(other.0 as i32 - self.0 as i32).0
    }
}

// Spellings indexed by pitch class
const SHARP_SPELLINGS: [(Natural, Accidental); 12] = [
    (Natural::C, Accidental::Natural),
    (Natural::C, Accidental::Sharp),
    (Natural::D, Accidental::Natural),
    (Natural::D, Accidental::Sharp),
    (Natural::E, Accidental::Natural),
    (Natural::F, Accidental::Natural),
    (Natural::F, Accidental::Sharp),
    (Natural::G, Accidental::Natural),
    (Natural::G, Accidental::Sharp),
    (Natural::A, Accidental::Natural),
    (Natural::A, Accidental::Sharp),
    (Natural::B, Accidental::Natural),
];

const FLAT_SPELLINGS: [(Natural, Accidental); 12] = [
    (Natural::C, Accidental::Natural),
    (Natural::D, Accidental::Flat),
    (Natural::D, Accidental::Natural),
    (Natural::E, Accidental::Flat),
    (Natural::E, Accidental::Natural),
    (Natural::F, Accidental::Natural),
    (Natural::G, Accidental::Flat),
    (Natural::G, Accidental::Natural),
    (Natural::A, Accidental::Flat),
    (Natural::A, Accidental::Natural),
    (Natural::B, Accidental::Flat),
    (Natural::B, Accidental::Natural),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    pub natural: Natural,
    pub accidental: Accidental,
}

impl Note {
    pub fn new(natural: Natural, accidental: Accidental) -> Self {
        Self {
            natural,
            accidental,
        }
    }

    pub fn pitch_class(&self) -> PitchClass {
        PitchClass::new(self.natural.semitone() as i32 + self.accidental.offset() as i32)
    }

    /// Canonical spelling of a pitch class.
    ///
    /// White keys never get an accidental; black keys use `#` or `b`
    /// according to `style`.
    pub fn spell(pitch_class: PitchClass, style: AccidentalStyle) -> Self {
        let table = match style {
            AccidentalStyle::Flat => &FLAT_SPELLINGS,
            AccidentalStyle::Sharp | AccidentalStyle::Natural => &SHARP_SPELLINGS,
        };
        let (natural, accidental) = table[pitch_class.value() as usize];

        Self::new(natural, accidental)
    }

    /// Upward semitone distance from this note to `other`
    pub fn semitones_to(&self, other: &Note) -> u8 {
        self.pitch_class().interval_to(other.pitch_class())
    }

    pub fn style(&self) -> AccidentalStyle {
        self.accidental.style()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.natural.as_str(), self.accidental.as_str())
    }
}

impl FromStr for Note {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_note(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(s: &str) -> Note {
        s.parse().unwrap()
    }

    #[test]
    fn test_pitch_class_of_naturals() {
        let expected = [("C", 0), ("D", 2), ("E", 4), ("F", 5), ("G", 7), ("A", 9), ("B", 11)];
        for (name, pc) in expected {
            assert_eq!(note(name).pitch_class().value(), pc, "{}", name);
        }
    }

    #[test]
    fn test_pitch_class_with_accidentals() {
        assert_eq!(note("C#").pitch_class(), note("Db").pitch_class());
        assert_eq!(note("Bb").pitch_class().value(), 10);
        assert_eq!(note("Cb").pitch_class().value(), 11);
        assert_eq!(note("B#").pitch_class().value(), 0);
    }

    #[test]
    fn test_spell_sharp_and_flat() {
        let sharps: Vec<String> = [1, 3, 6, 8, 10]
            .iter()
            .map(|&pc| Note::spell(PitchClass::new(pc), AccidentalStyle::Sharp).to_string())
            .collect();
        assert_eq!(sharps, vec!["C#", "D#", "F#", "G#", "A#"]);

        let flats: Vec<String> = [1, 3, 6, 8, 10]
            .iter()
            .map(|&pc| Note::spell(PitchClass::new(pc), AccidentalStyle::Flat).to_string())
            .collect();
        assert_eq!(flats, vec!["Db", "Eb", "Gb", "Ab", "Bb"]);
    }

    #[test]
    fn test_spell_naturals_ignore_style() {
        for style in [AccidentalStyle::Sharp, AccidentalStyle::Flat, AccidentalStyle::Natural] {
            assert_eq!(Note::spell(PitchClass::new(11), style).to_string(), "B");
            assert_eq!(Note::spell(PitchClass::new(5), style).to_string(), "F");
        }
    }

    #[test]
    fn test_natural_style_prefers_sharps() {
        assert_eq!(Note::spell(PitchClass::new(6), AccidentalStyle::Natural).to_string(), "F#");
    }

    #[test]
    fn test_pitch_class_wraps() {
        assert_eq!(PitchClass::new(-1).value(), 11);
        assert_eq!(PitchClass::new(24).value(), 0);
        assert_eq!(PitchClass::new(9).shift(4).value(), 1);
    }

    #[test]
    fn test_pitch_class_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<PitchClass>("200").is_err());
        assert!(serde_json::from_str::<PitchClass>("12").is_err());

        let pc: PitchClass = serde_json::from_str("10").unwrap();
        assert_eq!(Note::spell(pc, AccidentalStyle::Flat).to_string(), "Bb");
        assert_eq!(serde_json::to_string(&pc).unwrap(), "10");
    }

    #[test]
    fn test_pitch_class_try_from() {
        assert_eq!(PitchClass::try_from(11u8).unwrap().value(), 11);
        assert!(PitchClass::try_from(12u8).is_err());
    }

    #[test]
    fn test_semitones_to() {
        assert_eq!(note("C").semitones_to(&note("C")), 0);
        assert_eq!(note("C").semitones_to(&note("C#")), 1);
        assert_eq!(note("C").semitones_to(&note("B")), 11);
        assert_eq!(note("E").semitones_to(&note("Db")), 9);
    }

    #[test]
    fn test_key_style() {
        assert_eq!(note("Db").style(), AccidentalStyle::Flat);
        assert_eq!(note("F#").style(), AccidentalStyle::Sharp);
        assert_eq!(note("A").style(), AccidentalStyle::Natural);
    }
}
