//! Scale construction from named interval tables.

use std::fmt;
use std::str::FromStr;

use super::error::TheoryError;
use super::note::{clamp_note, Note, PitchClass};

/// Octave used when a caller doesn't pick one.
pub const DEFAULT_OCTAVE: i32 = 4;

/// A named scale shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaleType {
    Major,
    Minor,
    HarmonicMinor,
    MelodicMinor,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
}

impl ScaleType {
    pub const ALL: [ScaleType; 8] = [
        ScaleType::Major,
        ScaleType::Minor,
        ScaleType::HarmonicMinor,
        ScaleType::MelodicMinor,
        ScaleType::Dorian,
        ScaleType::Phrygian,
        ScaleType::Lydian,
        ScaleType::Mixolydian,
    ];

    /// Semitone steps from the root up to the octave.
    pub fn intervals(self) -> &'static [u8] {
        match self {
            ScaleType::Major => &[2, 2, 1, 2, 2, 2, 1],
            ScaleType::Minor => &[2, 1, 2, 2, 1, 2, 2],
            ScaleType::HarmonicMinor => &[2, 1, 2, 2, 1, 3, 1],
            ScaleType::MelodicMinor => &[2, 1, 2, 2, 2, 2, 1],
            ScaleType::Dorian => &[2, 1, 2, 2, 2, 1, 2],
            ScaleType::Phrygian => &[1, 2, 2, 2, 1, 2, 2],
            ScaleType::Lydian => &[2, 2, 2, 1, 2, 2, 1],
            ScaleType::Mixolydian => &[2, 2, 1, 2, 2, 1, 2],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScaleType::Major => "major",
            ScaleType::Minor => "minor",
            ScaleType::HarmonicMinor => "harmonic_minor",
            ScaleType::MelodicMinor => "melodic_minor",
            ScaleType::Dorian => "dorian",
            ScaleType::Phrygian => "phrygian",
            ScaleType::Lydian => "lydian",
            ScaleType::Mixolydian => "mixolydian",
        }
    }

    /// Human-readable title, e.g. "Harmonic Minor".
    pub fn title(self) -> String {
        self.name()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }
}

impl FromStr for ScaleType {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ScaleType::ALL
            .into_iter()
            .find(|t| t.name() == wanted)
            .ok_or_else(|| TheoryError::UnknownScaleType(s.to_string()))
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully resolved scale request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleSpec {
    pub root: PitchClass,
    pub scale_type: ScaleType,
    pub octave: i32,
}

impl ScaleSpec {
    /// Ascending note numbers from the root through the octave.
    ///
    /// Always `intervals().len() + 1` notes long.
    pub fn notes(&self) -> Vec<Note> {
        let mut current = self.root.in_octave(self.octave) as i32;
        let mut notes = Vec::with_capacity(self.scale_type.intervals().len() + 1);
        notes.push(clamp_note(current));
        for &step in self.scale_type.intervals() {
            current += step as i32;
            notes.push(clamp_note(current));
        }
        notes
    }
}

/// Build a scale from string names.
pub fn scale(root: &str, scale_type: &str, octave: i32) -> Result<Vec<Note>, TheoryError> {
    let spec = ScaleSpec {
        root: root.parse()?,
        scale_type: scale_type.parse()?,
        octave,
    };
    Ok(spec.notes())
}
