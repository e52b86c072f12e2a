//! Test fixtures and data factories
//!
//! Canned Groq payloads and relay configuration pointed at a mock server.

use groq_relay::Config;
use serde_json::{Value, json};

/// API key the mock server expects in the bearer header
pub const TEST_API_KEY: &str = "gsk-test-key";

/// Relay configuration that sends all traffic to `base_url`
pub fn config_for(base_url: &str) -> Config {
    let mut config = Config::default();
    config.groq.api_key = Some(TEST_API_KEY.to_string());
    config.groq.api_base = Some(base_url.to_string());
    config.groq.timeout = 5;
    config
}

/// Factory for Groq chat-completion replies
pub struct GroqReplyFactory;

impl GroqReplyFactory {
    /// A one-choice reply that finished normally
    pub fn reply(content: &str, total_tokens: u32) -> Value {
        json!({
            "id": "chatcmpl-7b1e",
            "object": "chat.completion",
            "created": 1_722_000_000u64,
            "model": "llama-3.3-70b-versatile",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "logprobs": null,
                "finish_reason": "stop"
            }],
            "usage": {
                "prompt_tokens": total_tokens / 2,
                "completion_tokens": total_tokens - total_tokens / 2,
                "total_tokens": total_tokens,
                "queue_time": 0.02
            },
            "system_fingerprint": "fp_test",
            "x_groq": {"id": "req_test"}
        })
    }

    /// A reply without any choices
    pub fn empty_choices() -> Value {
        json!({
            "id": "chatcmpl-empty",
            "object": "chat.completion",
            "created": 1_722_000_000u64,
            "model": "llama-3.3-70b-versatile",
            "choices": [],
            "usage": {"prompt_tokens": 12, "completion_tokens": 0, "total_tokens": 12}
        })
    }

    /// Groq-style error envelope
    pub fn error(message: &str) -> Value {
        json!({
            "error": {
                "message": message,
                "type": "invalid_request_error"
            }
        })
    }
}
