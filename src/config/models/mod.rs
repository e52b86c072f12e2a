//! Configuration sections

pub mod chat;
pub mod server;

pub use chat::ChatConfig;
pub use server::ServerConfig;

pub use crate::core::providers::groq::GroqConfig;
