//! Health check and liveness endpoints

use actix_web::{HttpResponse, Result as ActixResult};
use serde::Serialize;
use tracing::debug;

/// Service name reported by the health check
pub const SERVICE_NAME: &str = "Groq Integration API";

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
    /// Epoch milliseconds, as a string
    pub timestamp: String,
}

/// Liveness banner
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub endpoints: &'static str,
}

/// Basic health check endpoint. Never calls the provider.
pub async fn health_check() -> ActixResult<HttpResponse> {
    debug!("Health check requested");

    Ok(HttpResponse::Ok().json(HealthStatus {
        status: "UP",
        service: SERVICE_NAME,
        timestamp: chrono::Utc::now().timestamp_millis().to_string(),
    }))
}

pub async fn test_endpoint() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ServiceInfo {
        message: "Groq Integration API is running!",
        endpoints: "POST /api/chat/simple, POST /api/chat/with-history, GET /api/chat/health",
    }))
}
