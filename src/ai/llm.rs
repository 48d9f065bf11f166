//! Chat-completion client over blocking HTTP (`llm` feature).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::config::AiConfig;
use super::reply::{parse_reply, ModelReply};
use super::{ModelClient, ModelError};

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// An OpenAI-compatible chat-completion client.
pub struct LlmClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl LlmClient {
    /// Build a client if the config is enabled and has a key.
    pub fn from_config(config: &AiConfig) -> Option<Self> {
        if !config.is_usable() {
            return None;
        }
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| log::warn!("could not build HTTP client: {e}"))
            .ok()?;
        Some(Self {
            http,
            endpoint: format!("{}/chat/completions", config.api_url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            timeout: config.timeout(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl ModelClient for LlmClient {
    fn complete(&self, instruction: &str, text: &str) -> Result<ModelReply, ModelError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: instruction,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
            temperature: 0.0,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                if e.is_timeout() {
                    ModelError::Unavailable(format!("timed out after {:?}", self.timeout))
                } else {
                    ModelError::Unavailable(e.to_string())
                }
            })?;

        let body: ChatResponse = response
            .json()
            .map_err(|e| ModelError::ResponseInvalid(e.to_string()))?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| ModelError::ResponseInvalid("empty completion".to_string()))?;

        log::debug!("model replied: {content}");
        parse_reply(&content)
    }
}
