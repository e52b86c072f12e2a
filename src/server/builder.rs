//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for explicit construction and the
//! run_server function that wires command line, configuration and server.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{GatewayError, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};

/// Command line arguments for the relay binary
#[derive(Debug, Clone, Parser)]
#[command(name = "relay", version, about = "HTTP relay for the Groq chat-completions API")]
pub struct ServerArgs {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "RELAY_CONFIG", default_value = "config/relay.yaml")]
    pub config: PathBuf,

    /// Override the bind host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the bind port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Log filter, e.g. `info` or `groq_relay=debug`
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl ServerArgs {
    /// Apply command line overrides on top of loaded configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| GatewayError::Config("Configuration is required".to_string()))?;

        config.validate()?;
        HttpServer::new(&config)
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Load configuration according to `args` and run the server until shutdown
pub async fn run_server(args: ServerArgs) -> Result<()> {
    info!("Starting groq-relay v{}", crate::VERSION);

    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {:?}", path),
        Err(e) if e.not_found() => debug!("No .env file found"),
        Err(e) => return Err(GatewayError::config(format!("Failed to load .env: {}", e))),
    }

    info!("Loading configuration file: {:?}", args.config);
    let mut config = Config::load(&args.config).await?;
    args.apply(&mut config);

    let server = ServerBuilder::new().with_config(config.clone()).build()?;

    info!("Server starting at: http://{}", config.server().address());
    info!("API Endpoints:");
    info!("   POST /api/chat/simple - Single-turn chat");
    info!("   POST /api/chat/with-history - Chat with prior turns");
    info!("   GET  /api/chat/health - Health check");
    info!("   GET  /api/chat/test - Liveness banner");

    server.start().await
}
