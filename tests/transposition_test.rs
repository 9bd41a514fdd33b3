// Test chart transposition between keys through the public API

use chord_chart::{transpose_chart, validate_chart, ChartError};

const SHARP_KEYS: [&str; 12] = ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];
const FLAT_KEYS: [&str; 12] = ["C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B"];

#[test]
fn test_transpose_with_bass_into_flat_key() {
    assert_eq!(
        transpose_chart("| A/E| E |\n| C#m|", "E", "Db").unwrap(),
        "| Gb/Db | Db |\n| Bbm |"
    );
}

#[test]
fn test_transpose_simple_chord_into_flat_key() {
    assert_eq!(transpose_chart("| D |", "D", "Gb").unwrap(), "| Gb |");
}

#[test]
fn test_transpose_into_sharp_key() {
    assert_eq!(
        transpose_chart("| G/C | Bm | A |", "C", "E").unwrap(),
        "| B/E | D#m | C# |"
    );
}

#[test]
fn test_natural_destination_spells_with_sharps() {
    assert_eq!(transpose_chart("| Bb Eb |", "Bb", "C").unwrap(), "| C F |");
    assert_eq!(transpose_chart("| C F |", "C", "A").unwrap(), "| A D |");
    assert_eq!(transpose_chart("| E |", "C", "D").unwrap(), "| F# |");
}

#[test]
fn test_suffix_and_layout_unchanged() {
    assert_eq!(
        transpose_chart("|Am7b5/G  | | E7#9|", "A", "Bb").unwrap(),
        "| Bbm7b5/Ab | | F7#9 |"
    );
}

#[test]
fn test_identity_transposition_matches_validation() {
    let chart = "| A/E E | E | \n| C#m F#7 || B |";
    for key in ["C", "D", "E", "A", "C#", "F#", "G#"] {
        assert_eq!(
            transpose_chart(chart, key, key).unwrap(),
            validate_chart(chart).unwrap(),
            "identity transposition in {}",
            key
        );
    }
}

#[test]
fn test_identity_transposition_respells_to_key_style() {
    // same key in and out still applies the key's spelling
    assert_eq!(transpose_chart("| Bb Eb |", "C", "C").unwrap(), "| A# D# |");
    assert_eq!(validate_chart("| Bb Eb |").unwrap(), "| Bb Eb |");
    assert_eq!(transpose_chart("| C#m F# |", "Ab", "Ab").unwrap(), "| Dbm Gb |");
    assert_eq!(transpose_chart("| Bb Eb |", "F", "F").unwrap(), "| A# D# |");
}

#[test]
fn test_round_trip_through_sharp_keys() {
    let chart = "| A/E E | E |\n| C#m | F#m7/C# |";
    let expected = validate_chart(chart).unwrap();
    for key in SHARP_KEYS.iter().chain(FLAT_KEYS.iter()) {
        let there = transpose_chart(chart, "E", key).unwrap();
        let back = transpose_chart(&there, key, "E").unwrap();
        assert_eq!(back, expected, "E -> {} -> E", key);
    }
}

#[test]
fn test_round_trip_through_flat_keys() {
    let chart = "| Bb Eb/G | Cm7 | F7sus4 |";
    let expected = validate_chart(chart).unwrap();
    for key in FLAT_KEYS.iter().chain(SHARP_KEYS.iter()) {
        let there = transpose_chart(chart, "Bb", key).unwrap();
        let back = transpose_chart(&there, key, "Bb").unwrap();
        assert_eq!(back, expected, "Bb -> {} -> Bb", key);
    }
}

#[test]
fn test_octave_wraparound() {
    assert_eq!(transpose_chart("| B |", "B", "C").unwrap(), "| C |");
    assert_eq!(transpose_chart("| C |", "C", "B").unwrap(), "| B |");
}

#[test]
fn test_malformed_keys() {
    assert_eq!(
        transpose_chart("| C |", "X", "C").unwrap_err(),
        ChartError::InvalidNatural("X".to_string())
    );
    assert_eq!(
        transpose_chart("| C |", "C", "").unwrap_err(),
        ChartError::NoNatural("".to_string())
    );
    assert_eq!(
        transpose_chart("| C |", "C##", "C").unwrap_err(),
        ChartError::InvalidNote("C##".to_string())
    );
    assert_eq!(
        transpose_chart("| C |", "C", "Dbm").unwrap_err(),
        ChartError::InvalidNote("Dbm".to_string())
    );
}

#[test]
fn test_same_error_for_key_and_chart_body() {
    assert_eq!(
        transpose_chart("| C |", "W", "C").unwrap_err().kind(),
        transpose_chart("| W |", "C", "D").unwrap_err().kind()
    );
}

#[test]
fn test_key_errors_come_before_chart_errors() {
    assert_eq!(
        transpose_chart("C", "C", "H").unwrap_err(),
        ChartError::InvalidNatural("H".to_string())
    );
}

#[test]
fn test_chart_errors_propagate() {
    assert_eq!(
        transpose_chart("C", "C", "C").unwrap_err(),
        ChartError::BarLineShouldStartWithStripe("C".to_string())
    );
}
