//! Two-stage interpreter: optional model stage, then the deterministic parser.

use super::pattern::PatternParser;
use super::{Action, Command, InterpretError};
use crate::ai::{self, ModelClient, ModelError, ModelReply};

/// The model-backed first stage.
struct ModelStage {
    client: Box<dyn ModelClient>,
    instruction: String,
}

impl ModelStage {
    fn interpret(&self, text: &str) -> Result<Command, ModelError> {
        let reply = self.client.complete(&self.instruction, text)?;
        command_from_reply(reply)
    }
}

/// Validate a model reply against the action vocabulary.
fn command_from_reply(reply: ModelReply) -> Result<Command, ModelError> {
    let action = Action::from_name(&reply.action)
        .ok_or_else(|| ModelError::ResponseInvalid(format!("unknown action: {}", reply.action)))?;
    Ok(Command {
        action,
        parameters: reply.parameters,
    })
}

/// Maps free text to a [`Command`].
///
/// Holds no per-call state, so one interpreter can serve any number of callers.
pub struct CommandInterpreter {
    model: Option<ModelStage>,
    fallback: PatternParser,
}

impl CommandInterpreter {
    /// Deterministic-only interpreter.
    pub fn new() -> Self {
        Self {
            model: None,
            fallback: PatternParser::new(),
        }
    }

    /// Interpreter that asks `client` first.
    pub fn with_model(client: Box<dyn ModelClient>) -> Self {
        Self {
            model: Some(ModelStage {
                client,
                instruction: ai::prompt::instruction(),
            }),
            fallback: PatternParser::new(),
        }
    }

    /// Build from AI configuration. Without the `llm` feature, or without a
    /// usable config, this is deterministic-only.
    pub fn from_config(config: Option<&ai::AiConfig>) -> Self {
        #[cfg(feature = "llm")]
        {
            if let Some(client) = config.and_then(ai::llm::LlmClient::from_config) {
                log::info!("model stage enabled ({})", client.model());
                return Self::with_model(Box::new(client));
            }
        }
        #[cfg(not(feature = "llm"))]
        {
            if config.is_some_and(|c| c.is_usable()) {
                log::info!("AI config found but built without the `llm` feature");
            }
        }
        Self::new()
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// Interpret `text`.
    ///
    /// Model failures of any kind fall through to the deterministic parser;
    /// only [`InterpretError::UnrecognizedCommand`] reaches the caller.
    pub fn interpret(&self, text: &str) -> Result<Command, InterpretError> {
        if let Some(model) = &self.model {
            match model.interpret(text) {
                Ok(command) => {
                    log::debug!("model stage: {command}");
                    return Ok(command);
                }
                Err(e) => log::warn!("{e}; using pattern parser"),
            }
        }
        let command = self.fallback.parse(text)?;
        log::debug!("pattern stage: {command}");
        Ok(command)
    }
}

impl Default for CommandInterpreter {
    fn default() -> Self {
        Self::new()
    }
}
