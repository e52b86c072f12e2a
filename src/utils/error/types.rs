//! Error types for the relay

use crate::core::providers::groq::GroqError;
use thiserror::Error;

/// Result type alias for the relay
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the relay
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Caller input rejected before any outbound call
    #[error("Validation error: {0}")]
    Validation(String),

    /// Failures reported by the upstream chat provider
    #[error(transparent)]
    Provider(#[from] GroqError),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Message handed back to API callers.
    ///
    /// Validation failures carry their bare message; provider failures keep
    /// the upstream status and body so callers can tell causes apart.
    pub fn caller_message(&self) -> String {
        match self {
            GatewayError::Validation(msg) => msg.clone(),
            other => other.to_string(),
        }
    }

    /// Whether the error was caused by the caller's input
    pub fn is_validation(&self) -> bool {
        matches!(self, GatewayError::Validation(_))
    }
}
