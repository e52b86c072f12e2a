//! HTTP server implementation
//!
//! This module provides the HTTP server and routing functionality.

pub mod builder;
pub mod routes;
#[allow(clippy::module_inception)]
pub mod server;
pub mod state;
mod utils;
