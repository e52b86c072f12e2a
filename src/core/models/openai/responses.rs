//! Provider reply envelope

use serde::{Deserialize, Serialize};

use super::messages::Message;

/// Chat completion response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Response ID
    #[serde(default)]
    pub id: String,
    /// Object type
    #[serde(default)]
    pub object: String,
    /// Creation timestamp
    #[serde(default)]
    pub created: u64,
    /// Model that produced the reply
    pub model: String,
    /// Candidate completions; index 0 is the answer
    #[serde(default)]
    pub choices: Vec<Choice>,
    /// Usage statistics
    #[serde(default)]
    pub usage: Option<TokenUsage>,
}

/// Chat choice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    /// Choice index
    pub index: u32,
    /// Assistant message
    pub message: Option<Message>,
    /// Finish reason (stop, length, content_filter, ...)
    pub finish_reason: Option<String>,
}

/// Token usage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Prompt tokens
    pub prompt_tokens: u32,
    /// Completion tokens
    pub completion_tokens: u32,
    /// Total tokens
    pub total_tokens: u32,
}

impl CompletionResponse {
    /// First choice, if the provider returned any
    pub fn first_choice(&self) -> Option<&Choice> {
        self.choices.first()
    }

    /// Text of the first choice, or `None` when there is nothing to read
    pub fn response_text(&self) -> Option<&str> {
        self.first_choice()
            .and_then(|choice| choice.message.as_ref())
            .map(|message| message.content.as_str())
    }

    pub fn finish_reason(&self) -> Option<&str> {
        self.first_choice()
            .and_then(|choice| choice.finish_reason.as_deref())
    }

    pub fn total_tokens(&self) -> Option<u32> {
        self.usage.map(|usage| usage.total_tokens)
    }
}
