//! Live connection settings loaded from ~/.livecue/live.yaml.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Where and how to reach Live.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LiveConfig {
    /// Host running the AbletonOSC remote script.
    #[serde(default = "default_host")]
    pub host: String,
    /// UDP port AbletonOSC listens on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Velocity for generated notes.
    #[serde(default = "default_velocity")]
    pub velocity: u8,
    /// Track that receives generated basslines (0-based).
    #[serde(default)]
    pub track: u32,
    /// Clip slot that receives generated basslines (0-based).
    #[serde(default)]
    pub clip: u32,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    11000
}

fn default_velocity() -> u8 {
    100
}

impl LiveConfig {
    /// Load config from the standard path (~/.livecue/live.yaml).
    /// Returns None if the file doesn't exist (graceful fallback).
    pub fn load() -> Option<Self> {
        let home = dirs::home_dir()?;
        Self::load_from(&home.join(".livecue").join("live.yaml"))
    }

    pub fn load_from(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        serde_yaml::from_str(&content).ok()
    }

    /// `host:port` for socket calls.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            velocity: default_velocity(),
            track: 0,
            clip: 0,
        }
    }
}
