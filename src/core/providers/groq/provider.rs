//! Groq transport client
//!
//! Owns the process-wide HTTP client and performs the outbound
//! chat-completion call: dispatch, status classification, decode, retry.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use std::fmt;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use super::config::GroqConfig;
use super::error::{GroqError, RetryPolicy};
use crate::core::models::openai::{CompletionRequest, CompletionResponse};
use crate::core::traits::ChatProvider;
use crate::utils::error::Result;

/// Groq chat-completions client
///
/// Built once at startup; cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct GroqClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    retry: RetryPolicy,
}

// Same redaction as GroqConfig: the bearer token never reaches logs.
impl fmt::Debug for GroqClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroqClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("retry", &self.retry)
            .finish()
    }
}

impl GroqClient {
    /// Create a new Groq client
    pub fn new(config: &GroqConfig) -> std::result::Result<Self, GroqError> {
        config.validate().map_err(GroqError::Configuration)?;

        let api_key = config
            .api_key()
            .ok_or_else(|| GroqError::Configuration("API key is required".to_string()))?
            .to_string();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.timeout())
            .tcp_keepalive(Duration::from_secs(60))
            .default_headers(headers)
            .build()
            .map_err(|e| {
                GroqError::Configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            http,
            endpoint: config.completions_url(),
            api_key,
            retry: RetryPolicy {
                max_retries: config.max_retries,
                retry_client_errors: config.retry_client_errors,
            },
        })
    }

    /// Chat-completions URL this client posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Send a request, re-dispatching back to back until it succeeds or the
    /// retry policy gives up. The last classified error is returned.
    pub async fn send(
        &self,
        request: &CompletionRequest,
    ) -> std::result::Result<CompletionResponse, GroqError> {
        let mut attempts = 0;
        loop {
            attempts += 1;
            match self.dispatch(request).await {
                Ok(response) => {
                    if attempts > 1 {
                        info!(attempts, "Groq API call succeeded after retry");
                    }
                    return Ok(response);
                }
                Err(e) if self.retry.should_retry(&e, attempts) => {
                    warn!(attempt = attempts, error = %e, "Retrying Groq API call");
                }
                Err(e) => {
                    error!(attempts, error_type = e.error_type(), error = %e, "Groq API call failed");
                    return Err(e);
                }
            }
        }
    }

    /// One dispatch-classify-decode cycle
    async fn dispatch(
        &self,
        request: &CompletionRequest,
    ) -> std::result::Result<CompletionResponse, GroqError> {
        debug!(
            model = %request.model,
            messages = request.messages.len(),
            "Dispatching Groq chat request"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(GroqError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!("Failed to read error body: {}", e);
                    String::new()
                }
            };
            error!(status = status.as_u16(), body = %body, "Groq API returned an error status");
            return Err(GroqError::from_status(status, body));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(GroqError::from_transport)?;

        serde_json::from_slice(&bytes).map_err(|e| {
            error!(error = %e, "Failed to decode Groq response");
            GroqError::Decode(e.to_string())
        })
    }
}

#[async_trait]
impl ChatProvider for GroqClient {
    fn name(&self) -> &'static str {
        "groq"
    }

    async fn chat_completion(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
        Ok(self.send(request).await?)
    }
}
