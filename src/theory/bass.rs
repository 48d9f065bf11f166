//! Bassline generation: repeats a bass pattern template per bar, shifting
//! every other bar onto a randomly chosen low scale degree.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use super::error::TheoryError;
use super::note::{clamp_note, Note, PitchClass};
use super::scale::{ScaleSpec, ScaleType, DEFAULT_OCTAVE};

/// How many scale degrees the variation step picks from.
const VARIATION_DEGREES: usize = 5;

/// Longest bassline, in bars, that will be generated.
pub const MAX_BARS: usize = 1024;

/// One step of a pattern template: semitones above the root and a duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternStep {
    pub offset: i32,
    pub duration: f64,
}

const fn step(offset: i32, duration: f64) -> PatternStep {
    PatternStep { offset, duration }
}

/// A named bass motif.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BassPattern {
    Simple,
    Octave,
    Walking,
    Arpeggio,
}

impl BassPattern {
    /// Iteration order used when matching pattern names in text.
    pub const ALL: [BassPattern; 4] = [
        BassPattern::Simple,
        BassPattern::Octave,
        BassPattern::Walking,
        BassPattern::Arpeggio,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BassPattern::Simple => "simple",
            BassPattern::Octave => "octave",
            BassPattern::Walking => "walking",
            BassPattern::Arpeggio => "arpeggio",
        }
    }

    pub fn template(self) -> &'static [PatternStep] {
        const SIMPLE: &[PatternStep] = &[step(0, 1.0)];
        const OCTAVE: &[PatternStep] = &[step(0, 0.5), step(12, 0.5)];
        const WALKING: &[PatternStep] =
            &[step(0, 0.25), step(7, 0.25), step(12, 0.25), step(7, 0.25)];
        const ARPEGGIO: &[PatternStep] =
            &[step(0, 0.25), step(4, 0.25), step(7, 0.25), step(12, 0.25)];

        match self {
            BassPattern::Simple => SIMPLE,
            BassPattern::Octave => OCTAVE,
            BassPattern::Walking => WALKING,
            BassPattern::Arpeggio => ARPEGGIO,
        }
    }

    /// Look up a pattern by name, falling back to [`BassPattern::Simple`].
    pub fn resolve(name: &str) -> BassPattern {
        name.parse().unwrap_or(BassPattern::Simple)
    }
}

impl FromStr for BassPattern {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        BassPattern::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or(())
    }
}

impl fmt::Display for BassPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A pitch held for a duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteEvent {
    pub pitch: Note,
    pub duration: f64,
}

/// Ordered note events in playback order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bassline {
    events: Vec<NoteEvent>,
}

impl Bassline {
    pub fn events(&self) -> &[NoteEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Sum of all event durations.
    pub fn total_length(&self) -> f64 {
        self.events.iter().map(|e| e.duration).sum()
    }
}

impl From<Vec<NoteEvent>> for Bassline {
    fn from(events: Vec<NoteEvent>) -> Self {
        Self { events }
    }
}

/// Everything needed to generate one bassline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasslineSpec {
    pub root: PitchClass,
    pub scale_type: ScaleType,
    pub pattern: BassPattern,
    /// Number of bars (template repetitions), capped at [`MAX_BARS`].
    pub length: usize,
    pub octave: i32,
}

impl Default for BasslineSpec {
    fn default() -> Self {
        Self {
            root: PitchClass::C,
            scale_type: ScaleType::Minor,
            pattern: BassPattern::Walking,
            length: 4,
            octave: DEFAULT_OCTAVE,
        }
    }
}

impl BasslineSpec {
    /// Generate the bassline, drawing bar variations from `rng`.
    ///
    /// Even bars (0, 2, ...) play the template on the root. Odd bars shift
    /// the whole template by the distance from the root to one of the first
    /// five scale degrees.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Bassline {
        let scale = ScaleSpec {
            root: self.root,
            scale_type: self.scale_type,
            octave: self.octave,
        }
        .notes();
        let root = scale[0] as i32;
        let template = self.pattern.template();

        let bars = self.length.min(MAX_BARS);
        let mut events = Vec::with_capacity(template.len() * bars);
        for bar in 0..bars {
            let shift = if bar % 2 == 1 {
                let degrees = &scale[..VARIATION_DEGREES.min(scale.len())];
                degrees.choose(&mut *rng).map_or(0, |&d| d as i32 - root)
            } else {
                0
            };
            events.extend(template.iter().map(|s| NoteEvent {
                pitch: clamp_note(root + s.offset + shift),
                duration: s.duration,
            }));
        }
        Bassline::from(events)
    }
}

/// Generate a bassline from string names.
///
/// Unknown pattern names fall back to `simple`; unknown roots, unknown scale
/// types and lengths above [`MAX_BARS`] are errors.
pub fn generate_bassline<R: Rng + ?Sized>(
    root: &str,
    scale_type: &str,
    pattern: &str,
    length: usize,
    rng: &mut R,
) -> Result<Bassline, TheoryError> {
    if length > MAX_BARS {
        return Err(TheoryError::TooManyBars(length));
    }
    let spec = BasslineSpec {
        root: root.parse()?,
        scale_type: scale_type.parse()?,
        pattern: BassPattern::resolve(pattern),
        length,
        octave: DEFAULT_OCTAVE,
    };
    Ok(spec.generate(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn simple_pattern_variation_offsets_are_low_degrees() {
        let scale = ScaleSpec {
            root: "G".parse().unwrap(),
            scale_type: ScaleType::Minor,
            octave: 4,
        }
        .notes();
        let valid: Vec<i32> = scale[..5].iter().map(|&n| n as i32 - scale[0] as i32).collect();
        assert_eq!(valid, vec![0, 2, 3, 5, 7]);

        for seed in 0..32 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let line = generate_bassline("G", "minor", "simple", 4, &mut rng).unwrap();
            assert_eq!(line.len(), 4);
            for (bar, event) in line.events().iter().enumerate() {
                assert_eq!(event.duration, 1.0);
                let offset = event.pitch as i32 - scale[0] as i32;
                if bar % 2 == 0 {
                    assert_eq!(offset, 0);
                } else {
                    assert!(valid.contains(&offset), "offset {offset} out of range");
                }
            }
        }
    }

    #[test]
    fn same_seed_same_bassline() {
        let a = generate_bassline("A", "minor", "walking", 8, &mut rng()).unwrap();
        let b = generate_bassline("A", "minor", "walking", 8, &mut rng()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn walking_even_bar_is_template_on_root() {
        let line = generate_bassline("C", "major", "walking", 2, &mut rng()).unwrap();
        let first_bar: Vec<Note> = line.events()[..4].iter().map(|e| e.pitch).collect();
        assert_eq!(first_bar, vec![60, 67, 72, 67]);
    }

    #[test]
    fn odd_bar_shifts_every_note_equally() {
        let line = generate_bassline("C", "major", "arpeggio", 2, &mut rng()).unwrap();
        let events = line.events();
        let shift = events[4].pitch as i32 - events[0].pitch as i32;
        for i in 0..4 {
            assert_eq!(events[i + 4].pitch as i32 - events[i].pitch as i32, shift);
            assert_eq!(events[i + 4].duration, events[i].duration);
        }
    }

    #[test]
    fn unknown_pattern_falls_back_to_simple() {
        let line = generate_bassline("E", "minor", "funky", 3, &mut rng()).unwrap();
        assert_eq!(line.len(), 3);
        assert_eq!(line.events()[0], NoteEvent { pitch: 64, duration: 1.0 });
    }

    #[test]
    fn unknown_scale_propagates() {
        assert_eq!(
            generate_bassline("E", "bebop", "simple", 3, &mut rng()),
            Err(TheoryError::UnknownScaleType("bebop".to_string()))
        );
    }

    #[test]
    fn unknown_root_propagates() {
        assert!(matches!(
            generate_bassline("Eb", "minor", "simple", 3, &mut rng()),
            Err(TheoryError::UnknownNote(_))
        ));
    }

    #[test]
    fn zero_length_is_empty() {
        let line = generate_bassline("C", "minor", "walking", 0, &mut rng()).unwrap();
        assert!(line.is_empty());
        assert_eq!(line.total_length(), 0.0);
    }

    #[test]
    fn total_length_sums_durations() {
        let line = generate_bassline("D", "dorian", "octave", 4, &mut rng()).unwrap();
        assert_eq!(line.len(), 8);
        assert_approx_eq!(line.total_length(), 4.0);
    }

    #[test]
    fn length_above_max_bars_is_rejected() {
        assert_eq!(
            generate_bassline("C", "minor", "walking", usize::MAX / 2, &mut rng()),
            Err(TheoryError::TooManyBars(usize::MAX / 2))
        );
        let line = generate_bassline("C", "minor", "simple", MAX_BARS, &mut rng()).unwrap();
        assert_eq!(line.len(), MAX_BARS);
    }

    #[test]
    fn generate_caps_bars() {
        let spec = BasslineSpec {
            length: usize::MAX,
            pattern: BassPattern::Walking,
            ..BasslineSpec::default()
        };
        assert_eq!(spec.generate(&mut rng()).len(), MAX_BARS * 4);
    }

    #[test]
    fn templates_are_stable() {
        for p in BassPattern::ALL {
            assert_eq!(p.template(), p.template());
            assert_eq!(BassPattern::resolve(p.name()), p);
        }
    }

    #[test]
    fn default_spec_matches_interpreter_defaults() {
        let spec = BasslineSpec::default();
        assert_eq!(spec.root.name(), "C");
        assert_eq!(spec.scale_type, ScaleType::Minor);
        assert_eq!(spec.pattern, BassPattern::Walking);
        assert_eq!(spec.length, 4);
    }
}
