//! Pitch classes and note numbers: converts "C", "F#" plus an octave to MIDI numbers.

use std::fmt;
use std::str::FromStr;

use super::error::TheoryError;

/// A MIDI pitch number, 0–127.
pub type Note = u8;

/// The 12 recognized spellings, in pitch-class order. Sharps only.
pub const NOTES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// One of the 12 pitch classes within an octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);

    /// Index within the octave (C = 0, B = 11).
    pub fn index(self) -> u8 {
        self.0
    }

    /// Canonical sharp spelling.
    pub fn name(self) -> &'static str {
        NOTES[self.0 as usize]
    }

    /// All 12 pitch classes in order.
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..12).map(PitchClass)
    }

    /// Absolute note number for this pitch class in the given octave.
    ///
    /// Uses `index + (octave + 1) * 12`, so C4 = 60 and C-1 = 0. Results
    /// outside 0–127 are clamped.
    pub fn in_octave(self, octave: i32) -> Note {
        let pitch = i64::from(self.0) + (i64::from(octave) + 1) * 12;
        pitch.clamp(0, 127) as Note
    }
}

impl FromStr for PitchClass {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        NOTES
            .iter()
            .position(|&n| n == upper)
            .map(|i| PitchClass(i as u8))
            .ok_or_else(|| TheoryError::UnknownNote(s.to_string()))
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve a note name plus octave to a MIDI note number.
pub fn note_number(name: &str, octave: i32) -> Result<Note, TheoryError> {
    Ok(name.parse::<PitchClass>()?.in_octave(octave))
}

/// Clamp an arbitrary pitch to the MIDI range.
pub fn clamp_note(pitch: i32) -> Note {
    pitch.clamp(0, 127) as Note
}
