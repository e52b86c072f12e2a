//! Core data models for the relay

pub mod openai;
