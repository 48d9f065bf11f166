//! livecue: natural-language control of Ableton Live with generated basslines.
//!
//! Text goes through [`command::CommandInterpreter`] to become a
//! [`command::Command`]; [`live::Dispatcher`] turns commands into OSC
//! messages, calling into [`theory`] for bassline generation.

pub mod ai;
pub mod command;
pub mod error;
pub mod live;
pub mod theory;

pub use error::Error;
