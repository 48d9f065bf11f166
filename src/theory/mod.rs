//! Music theory engine: note numbers, scales, triads and bassline generation.
//!
//! Everything here is a pure function of its inputs except the bar variation
//! in [`BasslineSpec::generate`], which draws from a caller-supplied RNG.

pub mod bass;
pub mod chord;
pub mod error;
pub mod note;
pub mod scale;

pub use bass::{
    generate_bassline, BassPattern, Bassline, BasslineSpec, NoteEvent, PatternStep, MAX_BARS,
};
pub use chord::{chord, ChordType};
pub use error::TheoryError;
pub use note::{clamp_note, note_number, Note, PitchClass, NOTES};
pub use scale::{scale, ScaleSpec, ScaleType, DEFAULT_OCTAVE};
