//! Integration tests
//!
//! The relay is assembled exactly as `HttpServer` does it and talks to a
//! `wiremock` server through its real Groq client.

pub mod retry_tests;
