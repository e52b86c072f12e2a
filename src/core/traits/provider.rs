//! Chat provider trait
//!
//! The seam between the HTTP handlers and the outbound transport.

use async_trait::async_trait;

use crate::core::models::openai::{CompletionRequest, CompletionResponse};
use crate::utils::error::Result;

/// Something that can turn a completion request into a completion response
///
/// Implementations are shared across all in-flight requests and must not hold
/// per-call state.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Provider name, used in logs
    fn name(&self) -> &'static str;

    /// Send one chat-completion request, retrying as the provider sees fit
    async fn chat_completion(&self, request: &CompletionRequest) -> Result<CompletionResponse>;
}
