//! Response shaper
//!
//! Packages provider replies and failures into the JSON objects callers see.

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::models::openai::CompletionResponse;
use crate::utils::error::GatewayError;

/// Caller-facing result of a chat call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatResult {
    Success(ChatSuccess),
    Failure(ChatFailure),
}

/// Successful chat reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSuccess {
    /// Always true; only the shaper builds these
    #[serde(deserialize_with = "flag_true")]
    success: bool,
    /// Text of the first choice
    pub response: Option<String>,
    pub tokens_used: Option<u32>,
    /// Model echoed back by the provider
    pub model: String,
    pub finish_reason: Option<String>,
    /// Capture time in epoch milliseconds
    pub timestamp: i64,
}

/// Failed chat call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatFailure {
    /// Always false
    #[serde(deserialize_with = "flag_false")]
    success: bool,
    pub error: String,
}

impl ChatSuccess {
    pub fn success(&self) -> bool {
        self.success
    }
}

impl ChatFailure {
    pub fn success(&self) -> bool {
        self.success
    }
}

impl ChatResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ChatResult::Success(_))
    }
}

fn flag_true<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    expect_flag(deserializer, true)
}

fn flag_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    expect_flag(deserializer, false)
}

fn expect_flag<'de, D>(deserializer: D, expected: bool) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = bool::deserialize(deserializer)?;
    if value != expected {
        return Err(serde::de::Error::custom(format!(
            "expected success to be {}",
            expected
        )));
    }
    Ok(value)
}

/// Shapes provider output for callers
pub struct ResponseShaper;

impl ResponseShaper {
    /// Shape a completion captured at `timestamp` (epoch milliseconds)
    ///
    /// An empty choice list yields absent text and finish reason rather than
    /// an error.
    pub fn shape(response: &CompletionResponse, timestamp: i64) -> ChatResult {
        ChatResult::Success(ChatSuccess {
            success: true,
            response: response.response_text().map(str::to_owned),
            tokens_used: response.total_tokens(),
            model: response.model.clone(),
            finish_reason: response.finish_reason().map(str::to_owned),
            timestamp,
        })
    }

    /// Shape a completion stamped with the current time
    pub fn shape_now(response: &CompletionResponse) -> ChatResult {
        Self::shape(response, chrono::Utc::now().timestamp_millis())
    }

    pub fn shape_error(error: &GatewayError) -> ChatResult {
        ChatResult::Failure(ChatFailure {
            success: false,
            error: error.caller_message(),
        })
    }
}
