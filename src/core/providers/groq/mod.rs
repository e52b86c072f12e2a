//! Groq Provider
//!
//! Groq serves open models through an OpenAI-compatible chat-completions API.
//! This module holds the relay's only outbound transport.

// Core modules
mod config;
mod error;
mod provider;


// Re-export main types for external use
pub use config::{DEFAULT_API_BASE, DEFAULT_MODEL, GroqConfig};
pub use error::{GroqError, RetryPolicy};
pub use provider::GroqClient;
