//! Top-level error for one line of input.

use thiserror::Error;

use crate::command::InterpretError;
use crate::live::LiveError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Interpret(#[from] InterpretError),
    #[error(transparent)]
    Live(#[from] LiveError),
}
