//! Ableton Live collaborator: turns commands and basslines into OSC messages.
//!
//! Live is driven through the AbletonOSC remote script over UDP. Everything
//! except [`OscSender`] is socket-free so dispatch can be tested by recording
//! messages into a `Vec`.

pub mod clip;
pub mod config;
pub mod dispatch;
pub mod message;
pub mod normalize;
pub mod sink;

pub use clip::{place_notes, write_bassline, ClipTarget, PlacedNote};
pub use config::LiveConfig;
pub use dispatch::{bassline_spec, Dispatcher};
pub use message::LiveMessage;
pub use sink::{LiveSink, OscSender, PrintSink};

use thiserror::Error;

use crate::theory::TheoryError;

#[derive(Debug, Error)]
pub enum LiveError {
    #[error("socket error: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode OSC packet: {0}")]
    Encode(String),
    #[error("{action} needs a `{name}` value")]
    MissingParameter { action: &'static str, name: String },
    #[error("invalid value for `{name}`: {value}")]
    InvalidParameter { name: String, value: String },
    #[error(transparent)]
    Theory(#[from] TheoryError),
}
