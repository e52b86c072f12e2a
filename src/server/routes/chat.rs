//! Chat endpoints

use crate::core::chat::{ResponseShaper, validate_message};
use crate::core::models::openai::Message;
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

/// Body of `POST /api/chat/simple`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimpleChatRequest {
    /// Missing is treated like blank
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /api/chat/with-history`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    /// Prior turns, oldest first; missing or null means none
    #[serde(default)]
    pub history: Option<Vec<Message>>,
}

/// Single-turn chat
pub async fn simple_chat(
    state: web::Data<AppState>,
    request: web::Json<SimpleChatRequest>,
) -> ActixResult<HttpResponse> {
    info!("Received simple chat request");

    let message = validated(request.message.as_deref())?;

    match state.chat.chat(message).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ResponseShaper::shape_now(&response))),
        Err(e) => Err(failed(e)),
    }
}

/// Chat with caller-supplied history
pub async fn chat_with_history(
    state: web::Data<AppState>,
    request: web::Json<HistoryChatRequest>,
) -> ActixResult<HttpResponse> {
    let history = request.history.as_deref().unwrap_or_default();
    info!(
        history = history.len(),
        "Received chat request with history"
    );

    let message = validated(request.message.as_deref())?;

    match state.chat.chat_with_history(message, history).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ResponseShaper::shape_now(&response))),
        Err(e) => Err(failed(e)),
    }
}

fn validated(message: Option<&str>) -> Result<&str, GatewayError> {
    validate_message(message).inspect_err(|e| warn!("Rejected chat request: {}", e))
}

fn failed(e: GatewayError) -> actix_web::Error {
    error!("Chat request failed: {}", e);
    e.into()
}
