//! Request builder
//!
//! Turns a caller's message and optional prior turns into a complete
//! chat-completion payload.

use crate::config::ChatConfig;
use crate::core::models::openai::{CompletionRequest, Message};

/// Builds outbound completion requests
///
/// The model and generation parameters come from configuration, never from
/// the caller.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    model: String,
    chat: ChatConfig,
}

impl RequestBuilder {
    pub fn new(model: impl Into<String>, chat: ChatConfig) -> Self {
        Self {
            model: model.into(),
            chat,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build a request: system instruction, then `history` verbatim, then the
    /// new user message.
    ///
    /// The user message is not re-validated here.
    pub fn build(&self, user_message: &str, history: &[Message]) -> CompletionRequest {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(Message::system(self.chat.system_prompt.as_str()));
        messages.extend_from_slice(history);
        messages.push(Message::user(user_message));

        CompletionRequest {
            model: self.model.clone(),
            messages,
            temperature: self.chat.temperature,
            max_tokens: self.chat.max_tokens,
            top_p: self.chat.top_p,
            frequency_penalty: self.chat.frequency_penalty,
            presence_penalty: self.chat.presence_penalty,
        }
    }
}
