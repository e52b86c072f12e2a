//! Chat pipeline
//!
//! Request builder -> provider -> response shaper. Nothing here keeps state
//! between calls.

pub mod builder;
pub mod shaper;

pub use builder::RequestBuilder;
pub use shaper::{ChatFailure, ChatResult, ChatSuccess, ResponseShaper};

use std::sync::Arc;
use tracing::{debug, info};

use crate::core::models::openai::{CompletionResponse, Message};
use crate::core::traits::ChatProvider;
use crate::utils::error::{GatewayError, Result};

/// Message returned when a caller sends a blank message
pub const EMPTY_MESSAGE_ERROR: &str = "Message cannot be empty";

/// Reject missing or whitespace-only messages
///
/// The original, untrimmed text is returned for forwarding.
pub fn validate_message(message: Option<&str>) -> Result<&str> {
    match message {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(GatewayError::validation(EMPTY_MESSAGE_ERROR)),
    }
}

/// Runs one chat exchange against the configured provider
#[derive(Clone)]
pub struct ChatService {
    builder: RequestBuilder,
    provider: Arc<dyn ChatProvider>,
}

impl ChatService {
    pub fn new(builder: RequestBuilder, provider: Arc<dyn ChatProvider>) -> Self {
        Self { builder, provider }
    }

    pub fn builder(&self) -> &RequestBuilder {
        &self.builder
    }

    /// Single-turn chat
    pub async fn chat(&self, user_message: &str) -> Result<CompletionResponse> {
        self.chat_with_history(user_message, &[]).await
    }

    /// Chat with prior turns
    pub async fn chat_with_history(
        &self,
        user_message: &str,
        history: &[Message],
    ) -> Result<CompletionResponse> {
        let request = self.builder.build(user_message, history);
        debug!(
            model = %request.model,
            messages = request.messages.len(),
            "Built chat request"
        );

        let response = self.provider.chat_completion(&request).await?;
        info!(
            provider = self.provider.name(),
            tokens = ?response.total_tokens(),
            "Received chat response"
        );
        Ok(response)
    }
}
