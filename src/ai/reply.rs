//! Parsing of the model's JSON reply.

use serde::Deserialize;

use super::ModelError;
use crate::command::Parameters;

/// The structured answer a model gives: an action name and its parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelReply {
    #[serde(rename = "function", alias = "action")]
    pub action: String,
    pub parameters: Parameters,
}

/// Parse a reply body such as `{"function": "set_tempo", "parameters": {"bpm": 120}}`.
///
/// A surrounding ```` ```json ```` fence is tolerated.
pub fn parse_reply(content: &str) -> Result<ModelReply, ModelError> {
    let body = strip_fence(content.trim());
    serde_json::from_str(body).map_err(|e| ModelError::ResponseInvalid(e.to_string()))
}

fn strip_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
