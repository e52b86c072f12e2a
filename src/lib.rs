//! # groq-relay
//!
//! A thin HTTP relay in front of the Groq chat-completions API.
//!
//! Callers post a message (optionally with prior turns) to `/api/chat`. The
//! relay prepends a fixed system instruction, applies fixed generation
//! parameters, forwards the conversation to Groq with retries, and answers
//! with a compact JSON summary of the reply.
//!
//! ## Embedding the relay
//!
//! ```rust,no_run
//! use groq_relay::{Config, Relay};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/relay.yaml").await?;
//!     Relay::new(config)?.run().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

pub use config::Config;
pub use core::chat::{ChatResult, ChatService, RequestBuilder, ResponseShaper};
pub use core::models::openai::*;
pub use core::providers::{GroqClient, GroqConfig, GroqError};
pub use core::traits::ChatProvider;
pub use utils::error::{GatewayError, Result};

use tracing::info;

/// A configured relay ready to serve
pub struct Relay {
    config: Config,
    server: server::server::HttpServer,
}

impl Relay {
    /// Create a new relay instance
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let server = server::server::HttpServer::new(&config)?;
        Ok(Self { config, server })
    }

    /// Run the relay until shutdown
    pub async fn run(self) -> Result<()> {
        info!("Starting groq-relay");
        info!("Configuration: {:?}", self.config);

        self.server.start().await
    }
}

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
