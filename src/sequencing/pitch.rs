/*
Note Name Lookup
================

Maps scientific pitch names ("A4", "C#2", "Eb3") to frequencies in Hz using
twelve-tone equal temperament anchored at A4 = 440 Hz:

    midi = 12 * (octave + 1) + semitone
    freq = 440 * 2^((midi - 69) / 12)

Lookup happens at composition time, so a malformed name fails fast with a
clear error instead of defaulting to some silent frequency.
*/

use std::fmt;

/// Error for a note name that doesn't parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PitchError {
    name: String,
}

impl fmt::Display for PitchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid note name {:?} (expected letter A-G, optional # or b, then octave, e.g. \"C#4\")",
            self.name
        )
    }
}

impl std::error::Error for PitchError {}

/// Frequency in Hz of a named pitch, e.g. `note_freq("A4") == 440.0`.
pub fn note_freq(name: &str) -> Result<f64, PitchError> {
    let err = || PitchError {
        name: name.to_string(),
    };

    let mut chars = name.chars();
    let letter = chars.next().ok_or_else(err)?;
    let mut semitone: i32 = match letter.to_ascii_uppercase() {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return Err(err()),
    };

    let rest: String = chars.collect();
    let octave_str = if let Some(stripped) = rest.strip_prefix('#') {
        semitone += 1;
        stripped
    } else if let Some(stripped) = rest.strip_prefix('b') {
        semitone -= 1;
        stripped
    } else {
        rest.as_str()
    };

    let octave: i32 = octave_str.parse().map_err(|_| err())?;
    let midi = 12 * (octave + 1) + semitone;
    if !(0..=127).contains(&midi) {
        return Err(err());
    }

    Ok(440.0 * 2.0_f64.powf((midi as f64 - 69.0) / 12.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_is_reference_pitch() {
        assert!((note_freq("A4").unwrap() - 440.0).abs() < 1e-9);
    }

    #[test]
    fn middle_c() {
        assert!((note_freq("C4").unwrap() - 261.6256).abs() < 1e-3);
    }

    #[test]
    fn sharps_and_flats_are_enharmonic() {
        assert_eq!(note_freq("C#3").unwrap(), note_freq("Db3").unwrap());
    }

    #[test]
    fn octaves_double() {
        let a4 = note_freq("A4").unwrap();
        let a5 = note_freq("A5").unwrap();
        assert!((a5 / a4 - 2.0).abs() < 1e-9);
    }

    #[test]
    fn lowercase_letter_accepted() {
        assert_eq!(note_freq("a4").unwrap(), note_freq("A4").unwrap());
    }

    #[test]
    fn negative_octave_subcontra() {
        // C-1 is MIDI note 0
        assert!((note_freq("C-1").unwrap() - 8.1758).abs() < 1e-3);
    }

    #[test]
    fn malformed_names_fail_fast() {
        for bad in ["", "H4", "C", "C#", "C##4", "Cx4", "A99", "4A"] {
            assert!(note_freq(bad).is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn error_names_the_input() {
        let err = note_freq("H9").unwrap_err();
        assert!(err.to_string().contains("H9"));
    }
}
