//! Common test utilities for groq-relay
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::{config_for, relay_state};
//! use groq_relay::server::server::HttpServer;
//!
//! #[actix_web::test]
//! async fn my_test() {
//!     let mock = wiremock::MockServer::start().await;
//!     let state = relay_state(config_for(&mock.uri()));
//!     let app = actix_web::test::init_service(HttpServer::create_app(state)).await;
//!     // ...
//! }
//! ```

pub mod assertions;
pub mod fixtures;

pub use fixtures::{GroqReplyFactory, config_for};

use actix_web::web;
use groq_relay::Config;
use groq_relay::server::state::AppState;

/// Skip test if environment variable is not set
#[macro_export]
macro_rules! skip_without_env {
    ($var:expr) => {
        if std::env::var($var).map(|v| v.trim().is_empty()).unwrap_or(true) {
            eprintln!("Skipping test: {} environment variable not set", $var);
            return;
        }
    };
}

/// Shared state as the server would build it, backed by a real Groq client
pub fn relay_state(config: Config) -> web::Data<AppState> {
    web::Data::new(AppState::new(config).expect("relay state should build"))
}
