//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::chat::{ChatService, RequestBuilder};
use crate::core::providers::GroqClient;
use crate::core::traits::ChatProvider;
use crate::utils::error::Result;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Built once at startup. Handlers only read from it, so every worker can
/// hold a clone.
#[derive(Clone)]
pub struct AppState {
    /// Relay configuration (shared read-only)
    pub config: Arc<Config>,
    /// Chat pipeline bound to the configured provider
    pub chat: ChatService,
}

impl AppState {
    /// Create state backed by a Groq client built from `config`
    pub fn new(config: Config) -> Result<Self> {
        let client = GroqClient::new(config.groq())?;
        Ok(Self::with_provider(config, Arc::new(client)))
    }

    /// Create state around an already-built provider
    pub fn with_provider(config: Config, provider: Arc<dyn ChatProvider>) -> Self {
        let builder = RequestBuilder::new(config.groq().model.clone(), config.chat().clone());
        Self {
            config: Arc::new(config),
            chat: ChatService::new(builder, provider),
        }
    }

    /// Get relay configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
