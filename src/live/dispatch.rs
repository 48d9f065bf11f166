//! Command dispatch: turns interpreted commands into Live messages.
//!
//! This is where required parameters are enforced: the interpreter leaves
//! unfilled parameters out, and a mixer action missing one fails here.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::clip::{write_bassline, ClipTarget};
use super::config::LiveConfig;
use super::message::LiveMessage;
use super::normalize;
use super::sink::LiveSink;
use super::LiveError;
use crate::command::{Action, Command, Parameters};
use crate::theory::{BassPattern, Bassline, BasslineSpec, MAX_BARS};

/// Read a bassline request, filling gaps with the defaults.
///
/// Unknown pattern names fall back to `simple`; unknown roots and scale
/// types are errors. A length must be a finite number from 0 to [`MAX_BARS`].
pub fn bassline_spec(params: &Parameters) -> Result<BasslineSpec, LiveError> {
    let mut spec = BasslineSpec::default();

    if let Some(root) = params.get("root") {
        spec.root = root.to_string().parse()?;
    }
    if let Some(scale_type) = params.get("scale_type") {
        spec.scale_type = scale_type.to_string().parse()?;
    }
    if let Some(pattern) = params.get("pattern") {
        spec.pattern = BassPattern::resolve(&pattern.to_string());
    }
    if let Some(length) = params.get("length") {
        spec.length = match length.as_f64() {
            Some(n) if n.is_finite() && (0.0..=MAX_BARS as f64).contains(&n) => n as usize,
            _ => {
                return Err(LiveError::InvalidParameter {
                    name: "length".to_string(),
                    value: length.to_string(),
                })
            }
        };
    }
    Ok(spec)
}

/// Executes commands against a [`LiveSink`], owning the RNG for bassline variation.
pub struct Dispatcher {
    config: LiveConfig,
    rng: ChaCha8Rng,
}

impl Dispatcher {
    /// Dispatcher with a fixed seed, for reproducible basslines.
    pub fn new(config: LiveConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Dispatcher seeded from OS entropy.
    pub fn from_entropy(config: LiveConfig) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    pub fn config(&self) -> &LiveConfig {
        &self.config
    }

    /// Generate a bassline using this dispatcher's RNG.
    pub fn generate(&mut self, request: &BasslineSpec) -> Bassline {
        request.generate(&mut self.rng)
    }

    /// Carry out one command.
    pub fn execute<S: LiveSink + ?Sized>(
        &mut self,
        command: &Command,
        sink: &mut S,
    ) -> Result<(), LiveError> {
        let msg = match command.action {
            Action::CreateBassline => return self.create_bassline(command, sink),
            Action::SetTempo => LiveMessage::SetTempo(normalize::tempo(number(command, "bpm")?)),
            Action::StartPlayback => LiveMessage::StartPlayback,
            Action::StopPlayback => LiveMessage::StopPlayback,
            Action::TriggerClip => LiveMessage::TriggerClip {
                track: index(command, "track")?,
                clip: index(command, "clip")?,
            },
            Action::SetTrackVolume => LiveMessage::SetTrackVolume {
                track: index(command, "track")?,
                volume: normalize::volume(number(command, "volume")?),
            },
            Action::SetTrackPan => LiveMessage::SetTrackPan {
                track: index(command, "track")?,
                pan: normalize::pan(number(command, "pan")?),
            },
            Action::MuteTrack => LiveMessage::MuteTrack {
                track: index(command, "track")?,
            },
            Action::SoloTrack => LiveMessage::SoloTrack {
                track: index(command, "track")?,
            },
        };
        sink.send(&msg)
    }

    fn create_bassline<S: LiveSink + ?Sized>(
        &mut self,
        command: &Command,
        sink: &mut S,
    ) -> Result<(), LiveError> {
        let spec = bassline_spec(&command.parameters)?;
        let bassline = self.generate(&spec);
        log::info!(
            "generated {} {} {} bassline, {} bars, {} notes",
            spec.root,
            spec.scale_type,
            spec.pattern,
            spec.length,
            bassline.len()
        );
        let target = ClipTarget {
            track: self.config.track,
            clip: self.config.clip,
            velocity: self.config.velocity,
            track_name: format!("{} {} Bass", spec.root, spec.scale_type.title()),
        };
        write_bassline(sink, &target, &bassline)
    }
}

fn number(command: &Command, name: &str) -> Result<f64, LiveError> {
    let value = command.get(name).ok_or_else(|| LiveError::MissingParameter {
        action: command.action.name(),
        name: name.to_string(),
    })?;
    match value.as_f64() {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(LiveError::InvalidParameter {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

fn index(command: &Command, name: &str) -> Result<u32, LiveError> {
    number(command, name).map(normalize::index_from_spoken)
}
