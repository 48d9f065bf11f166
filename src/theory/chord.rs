//! Triad construction.

use std::str::FromStr;

use super::error::TheoryError;
use super::note::{clamp_note, Note};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChordType {
    Minor,
    Major,
    Diminished,
    Augmented,
}

impl ChordType {
    pub const ALL: [ChordType; 4] = [
        ChordType::Minor,
        ChordType::Major,
        ChordType::Diminished,
        ChordType::Augmented,
    ];

    /// Semitone offsets of each chord tone above the root.
    pub fn offsets(self) -> [u8; 3] {
        match self {
            ChordType::Minor => [0, 3, 7],
            ChordType::Major => [0, 4, 7],
            ChordType::Diminished => [0, 3, 6],
            ChordType::Augmented => [0, 4, 8],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ChordType::Minor => "minor",
            ChordType::Major => "major",
            ChordType::Diminished => "diminished",
            ChordType::Augmented => "augmented",
        }
    }
}

impl FromStr for ChordType {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ChordType::ALL
            .into_iter()
            .find(|t| t.name() == wanted)
            .ok_or_else(|| TheoryError::UnknownChordType(s.to_string()))
    }
}

/// Stack a triad on `root`.
pub fn chord(root: Note, chord_type: &str) -> Result<[Note; 3], TheoryError> {
    let kind: ChordType = chord_type.parse()?;
    Ok(kind.offsets().map(|o| clamp_note(root as i32 + o as i32)))
}
