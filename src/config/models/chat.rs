//! Chat request defaults
//!
//! Generation parameters applied to every outbound request. Callers cannot
//! change them.

use serde::{Deserialize, Serialize};

/// Instruction placed first in every conversation
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful, professional assistant. \
     Provide clear, concise, and accurate answers. \
     If you don't know something, say so honestly.";

/// Chat configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// System instruction
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Maximum output tokens; omitted from the request when unset
    #[serde(default = "default_max_tokens")]
    pub max_tokens: Option<u32>,
    /// Nucleus-sampling threshold
    #[serde(default = "default_top_p")]
    pub top_p: f64,
    #[serde(default)]
    pub frequency_penalty: f64,
    #[serde(default)]
    pub presence_penalty: f64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            system_prompt: default_system_prompt(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            top_p: default_top_p(),
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        }
    }
}

impl ChatConfig {
    /// Validate chat configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.system_prompt.trim().is_empty() {
            return Err("System prompt cannot be empty".to_string());
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "Temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            ));
        }

        if !(self.top_p > 0.0 && self.top_p <= 1.0) {
            return Err(format!("top_p must be in (0.0, 1.0], got {}", self.top_p));
        }

        for (name, value) in [
            ("frequency_penalty", self.frequency_penalty),
            ("presence_penalty", self.presence_penalty),
        ] {
            if !(-2.0..=2.0).contains(&value) {
                return Err(format!("{} must be between -2.0 and 2.0, got {}", name, value));
            }
        }

        if self.max_tokens == Some(0) {
            return Err("max_tokens must be greater than 0".to_string());
        }

        Ok(())
    }
}

fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_tokens() -> Option<u32> {
    Some(1000)
}

fn default_top_p() -> f64 {
    0.9
}
