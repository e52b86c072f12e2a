//! OpenAI-compatible wire models
//!
//! Groq speaks the OpenAI chat-completions format. This module holds the
//! subset of it the relay sends and reads:
//!
//! - `messages` - message roles and role-tagged messages
//! - `requests` - the outbound chat-completion payload
//! - `responses` - the provider's reply envelope

pub mod messages;
pub mod requests;
pub mod responses;

pub use messages::{Message, MessageRole};
pub use requests::CompletionRequest;
pub use responses::{Choice, CompletionResponse, TokenUsage};
