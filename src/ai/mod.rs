//! Language-model assistance: optional first stage of command interpretation.
//!
//! The interpreter only sees the [`ModelClient`] trait. The HTTP client lives
//! behind the `llm` feature; without it the crate runs deterministic-only.

pub mod config;
#[cfg(feature = "llm")]
pub mod llm;
pub mod prompt;
pub mod reply;

pub use config::AiConfig;
pub use reply::{parse_reply, ModelReply};

use thiserror::Error;

/// Why the model stage produced nothing usable.
///
/// Never surfaces from `CommandInterpreter::interpret`; it is logged and the
/// deterministic parser takes over.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("model unavailable: {0}")]
    Unavailable(String),
    #[error("invalid model response: {0}")]
    ResponseInvalid(String),
}

/// A language model that maps raw text to a structured reply.
pub trait ModelClient: Send + Sync {
    /// Send `text` together with the fixed `instruction` and return the reply.
    ///
    /// Implementations must bound the call with a timeout.
    fn complete(&self, instruction: &str, text: &str) -> Result<ModelReply, ModelError>;
}
