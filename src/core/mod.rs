//! Core functionality for the relay
//!
//! Wire models, the outbound provider, and the chat pipeline that glues
//! them together.

pub mod chat;
pub mod models;
pub mod providers;
pub mod traits;
