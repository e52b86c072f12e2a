//! Groq Provider Configuration
//!
//! Configuration for Groq API access including authentication, model and retry settings.

use crate::config::validation::validate_api_base;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "https://api.groq.com";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Groq provider configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct GroqConfig {
    /// API key for Groq authentication
    pub api_key: Option<String>,

    /// API base URL (default: https://api.groq.com)
    pub api_base: Option<String>,

    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,

    /// Per-attempt timeout in seconds, covering connect and the full response
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Additional attempts after the first failed one
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Whether 4xx responses are retried like any other failure
    #[serde(default = "default_true")]
    pub retry_client_errors: bool,
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: None,
            model: default_model(),
            timeout: default_timeout(),
            max_retries: default_max_retries(),
            retry_client_errors: true,
        }
    }
}

// The API key must never end up in logs.
impl fmt::Debug for GroqConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroqConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .field("retry_client_errors", &self.retry_client_errors)
            .finish()
    }
}

impl GroqConfig {
    /// Validate the provider configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key().is_none() {
            return Err(
                "Groq API key not provided (set groq.api_key or GROQ_API_KEY)".to_string(),
            );
        }

        if self.model.trim().is_empty() {
            return Err("Model identifier cannot be empty".to_string());
        }

        if self.timeout == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        validate_api_base(&self.get_api_base())
    }

    /// Configured API key, ignoring blank values
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.trim().is_empty())
    }

    /// Get API base, falling back to the public endpoint
    pub fn get_api_base(&self) -> String {
        self.api_base
            .clone()
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
    }

    /// Full URL of the chat-completions endpoint
    pub fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.get_api_base().trim_end_matches('/')
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_true() -> bool {
    true
}
