//! AI configuration: loads optional ~/.livecue/ai.yaml, or falls back to OPENAI_API_KEY.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable consulted when no config file exists.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// AI configuration loaded from ~/.livecue/ai.yaml.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AiConfig {
    /// Whether the model stage runs at all.
    #[serde(default)]
    pub enabled: bool,
    /// LLM provider name (informational, e.g. "openai").
    #[serde(default = "default_provider")]
    pub provider: String,
    /// API base URL; `/chat/completions` is appended.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// API key (secret).
    #[serde(default)]
    pub api_key: String,
    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Upper bound on one round trip.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_provider() -> String {
    "openai".to_string()
}

fn default_api_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            provider: default_provider(),
            api_url: default_api_url(),
            api_key: String::new(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AiConfig {
    /// Enabled and holding a key.
    pub fn is_usable(&self) -> bool {
        self.enabled && !self.api_key.trim().is_empty()
    }

    /// Round-trip timeout, never zero.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    /// Build an enabled config from a raw API key, keeping other defaults.
    pub fn with_key(api_key: impl Into<String>) -> Self {
        Self {
            enabled: true,
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Config from `OPENAI_API_KEY`, if set and non-empty.
    pub fn from_env() -> Option<Self> {
        let key = std::env::var(API_KEY_ENV).ok()?;
        if key.trim().is_empty() {
            return None;
        }
        Some(Self::with_key(key))
    }

    /// Load from an explicit path. Returns None if missing or malformed.
    pub fn load_from(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        serde_yaml::from_str(&content).ok()
    }
}

/// Get the AI config file path.
fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".livecue").join("ai.yaml"))
}

/// Load AI configuration from ~/.livecue/ai.yaml, then the environment.
/// Returns None if neither is present.
pub fn load_config() -> Option<AiConfig> {
    config_path()
        .and_then(|p| AiConfig::load_from(&p))
        .or_else(AiConfig::from_env)
}
