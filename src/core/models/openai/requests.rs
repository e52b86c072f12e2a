//! Outbound chat-completion payload

use serde::{Deserialize, Serialize};

use super::messages::Message;

/// Chat completion request (OpenAI compatible)
///
/// Message order is the conversation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Model to use for completion
    pub model: String,
    /// Ordered conversation
    pub messages: Vec<Message>,
    /// Temperature (0.0 to 2.0)
    pub temperature: f64,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Top-p sampling
    pub top_p: f64,
    /// Frequency penalty
    pub frequency_penalty: f64,
    /// Presence penalty
    pub presence_penalty: f64,
}
