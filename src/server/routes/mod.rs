//! HTTP route modules
//!
//! Every route lives under `/api/chat`.

pub mod chat;
pub mod health;

use actix_web::web;

/// Base path shared by all routes
pub const API_SCOPE: &str = "/api/chat";

/// Register the route table
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(API_SCOPE)
            .route("/simple", web::post().to(chat::simple_chat))
            .route("/with-history", web::post().to(chat::chat_with_history))
            .route("/health", web::get().to(health::health_check))
            .route("/test", web::get().to(health::test_endpoint)),
    );
}
