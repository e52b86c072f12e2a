//! Core traits module
//!
//! Contains the abstract interfaces the HTTP layer depends on

pub mod provider;

pub use provider::ChatProvider;
