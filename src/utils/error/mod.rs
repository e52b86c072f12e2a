//! Error handling for the relay
//!
//! This module defines the crate-wide error type and its HTTP rendering.

#![allow(missing_docs)]

mod helpers;
mod response;
mod types;

pub use types::{GatewayError, Result};
