//! Command interpretation: free text → `(action, parameters)`.
//!
//! A [`CommandInterpreter`] tries an optional language-model stage first and
//! always falls back to the deterministic [`PatternParser`].

pub mod interpreter;
pub mod pattern;
pub mod vocabulary;

pub use interpreter::CommandInterpreter;
pub use pattern::PatternParser;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed set of actions an interpreter may produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    SetTempo,
    StartPlayback,
    StopPlayback,
    TriggerClip,
    SetTrackVolume,
    SetTrackPan,
    MuteTrack,
    SoloTrack,
    CreateBassline,
}

impl Action {
    pub const ALL: [Action; 9] = [
        Action::SetTempo,
        Action::StartPlayback,
        Action::StopPlayback,
        Action::TriggerClip,
        Action::SetTrackVolume,
        Action::SetTrackPan,
        Action::MuteTrack,
        Action::SoloTrack,
        Action::CreateBassline,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Action::SetTempo => "set_tempo",
            Action::StartPlayback => "start_playback",
            Action::StopPlayback => "stop_playback",
            Action::TriggerClip => "trigger_clip",
            Action::SetTrackVolume => "set_track_volume",
            Action::SetTrackPan => "set_track_pan",
            Action::MuteTrack => "mute_track",
            Action::SoloTrack => "solo_track",
            Action::CreateBassline => "create_bassline",
        }
    }

    pub fn from_name(name: &str) -> Option<Action> {
        let wanted = name.trim();
        Action::ALL.into_iter().find(|a| a.name() == wanted)
    }

    /// Declared parameter names, in positional order.
    pub fn parameter_names(self) -> &'static [&'static str] {
        match self {
            Action::CreateBassline => vocabulary::BASSLINE_PARAMS,
            other => vocabulary::TRIGGERS
                .iter()
                .find(|t| t.action == other)
                .map(|t| t.params)
                .unwrap_or(&[]),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parameter value: numbers from the text scan, names for musical settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Integer(i64),
    Number(f64),
    Text(String),
}

impl ParamValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Integer(i) => Some(*i as f64),
            ParamValue::Number(n) => Some(*n),
            ParamValue::Text(s) => s.trim().parse().ok(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Integer(i) => write!(f, "{i}"),
            ParamValue::Number(n) => write!(f, "{n}"),
            ParamValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<f64> for ParamValue {
    fn from(n: f64) -> Self {
        ParamValue::Number(n)
    }
}

impl From<i64> for ParamValue {
    fn from(i: i64) -> Self {
        ParamValue::Integer(i)
    }
}

/// Named parameters of a command. Unfilled parameters are simply absent.
pub type Parameters = BTreeMap<String, ParamValue>;

/// One interpreted instruction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Command {
    pub action: Action,
    pub parameters: Parameters,
}

impl Command {
    pub fn new(action: Action) -> Self {
        Self {
            action,
            parameters: Parameters::new(),
        }
    }

    pub fn with(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.parameters.insert(name.to_string(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.parameters.get(name)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.action)?;
        for (i, (name, value)) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}={value}")?;
        }
        f.write_str(")")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpretError {
    #[error("could not understand command: {text}")]
    UnrecognizedCommand { text: String },
}
