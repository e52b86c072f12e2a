//! Configuration management for the relay
//!
//! Configuration comes from an optional YAML file, then environment
//! variables override individual fields. The result is validated once
//! before the server starts.

pub mod models;
pub mod validation;

pub use models::*;

use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

/// Environment variable holding the Groq API key
pub const ENV_API_KEY: &str = "GROQ_API_KEY";
/// Environment variable overriding the Groq API base URL
pub const ENV_API_BASE: &str = "GROQ_API_BASE";
/// Environment variable overriding the model identifier
pub const ENV_MODEL: &str = "GROQ_MODEL";
/// Environment variable overriding the per-attempt timeout (seconds)
pub const ENV_TIMEOUT: &str = "GROQ_TIMEOUT";
/// Environment variable overriding the retry count
pub const ENV_MAX_RETRIES: &str = "GROQ_MAX_RETRIES";
/// Environment variable overriding the bind host
pub const ENV_HOST: &str = "RELAY_HOST";
/// Environment variable overriding the bind port
pub const ENV_PORT: &str = "RELAY_PORT";

/// Main configuration struct for the relay
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream Groq settings
    #[serde(default)]
    pub groq: GroqConfig,
    /// Fixed generation parameters
    #[serde(default)]
    pub chat: ChatConfig,
}

impl Config {
    /// Load configuration from a YAML file and validate it
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self::read_file(path.as_ref()).await?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults plus overrides from `lookup`, validated
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_overrides(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file when it exists, apply environment overrides, validate.
    ///
    /// A missing file is not an error: the relay can run from environment
    /// variables alone.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let mut config = if path.exists() {
            Self::read_file(path).await?
        } else {
            warn!(
                "Configuration file {:?} not found, using defaults and environment",
                path
            );
            Self::default()
        };

        config.apply_env()?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse a YAML document without validating it
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))
    }

    async fn read_file(path: &Path) -> Result<Self> {
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_yaml_str(&content)
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Blank values are ignored so an empty `GROQ_API_BASE=` does not wipe
    /// out a value from the file.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(key) = get(ENV_API_KEY) {
            self.groq.api_key = Some(key);
        }
        if let Some(base) = get(ENV_API_BASE) {
            self.groq.api_base = Some(base);
        }
        if let Some(model) = get(ENV_MODEL) {
            self.groq.model = model;
        }
        if let Some(timeout) = get(ENV_TIMEOUT) {
            self.groq.timeout = parse_number(ENV_TIMEOUT, &timeout)?;
        }
        if let Some(retries) = get(ENV_MAX_RETRIES) {
            self.groq.max_retries = parse_number(ENV_MAX_RETRIES, &retries)?;
        }
        if let Some(host) = get(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = get(ENV_PORT) {
            self.server.port = parse_number(ENV_PORT, &port)?;
        }

        Ok(())
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Get Groq configuration
    pub fn groq(&self) -> &GroqConfig {
        &self.groq
    }

    /// Get chat configuration
    pub fn chat(&self) -> &ChatConfig {
        &self.chat
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| GatewayError::Config(format!("Server config error: {}", e)))?;

        self.groq
            .validate()
            .map_err(|e| GatewayError::Config(format!("Groq config error: {}", e)))?;

        self.chat
            .validate()
            .map_err(|e| GatewayError::Config(format!("Chat config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| GatewayError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| GatewayError::Config(format!("{} must be a number, got {:?}", key, value)))
}
