//! Groq-specific error types and retry classification
//!
//! Every failed attempt against the chat-completions endpoint lands in one of
//! these variants. The display strings are what API callers eventually see.

use reqwest::StatusCode;
use thiserror::Error;

/// Groq-specific error types
#[derive(Debug, Error)]
pub enum GroqError {
    /// Provider rejected the request (4xx)
    #[error("Client error: {status} - {body}")]
    Client { status: StatusCode, body: String },

    /// Provider-side failure (5xx)
    #[error("Server error: {status} - {body}")]
    Server { status: StatusCode, body: String },

    /// Any other non-success status that reached us
    #[error("Unexpected status: {status} - {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    /// Connect, DNS, reset or timeout failure
    #[error("Failed to call Groq API: {0}")]
    Network(String),

    /// Success status with a body that is not a completion
    #[error("Failed to call Groq API: invalid response body: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl GroqError {
    /// Classify a non-success HTTP status
    pub fn from_status(status: StatusCode, body: String) -> Self {
        if status.is_client_error() {
            GroqError::Client { status, body }
        } else if status.is_server_error() {
            GroqError::Server { status, body }
        } else {
            GroqError::UnexpectedStatus { status, body }
        }
    }

    /// Classify a transport-level failure
    pub fn from_transport(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            GroqError::Network(format!("request timed out: {}", error))
        } else {
            GroqError::Network(error.to_string())
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            GroqError::Client { .. } => "client_error",
            GroqError::Server { .. } => "server_error",
            GroqError::UnexpectedStatus { .. } => "unexpected_status",
            GroqError::Network(_) => "network_error",
            GroqError::Decode(_) => "decode_error",
            GroqError::Configuration(_) => "configuration_error",
        }
    }

    /// HTTP status returned by the provider, if the failure carried one
    pub fn http_status(&self) -> Option<u16> {
        match self {
            GroqError::Client { status, .. }
            | GroqError::Server { status, .. }
            | GroqError::UnexpectedStatus { status, .. } => Some(status.as_u16()),
            _ => None,
        }
    }

    /// Whether another attempt may be made under `policy`
    pub fn is_retryable(&self, policy: &RetryPolicy) -> bool {
        match self {
            GroqError::Client { .. } => policy.retry_client_errors,
            GroqError::Configuration(_) => false,
            _ => true,
        }
    }
}

/// Retry eligibility for outbound calls
///
/// Retries are immediate; there is no backoff between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Additional attempts after the first one
    pub max_retries: u32,
    /// Retry 4xx responses too
    pub retry_client_errors: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            retry_client_errors: true,
        }
    }
}

impl RetryPolicy {
    /// Total attempts including the first
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Decide whether to re-dispatch after `attempts` completed attempts
    pub fn should_retry(&self, error: &GroqError, attempts: u32) -> bool {
        attempts < self.max_attempts() && error.is_retryable(self)
    }
}
