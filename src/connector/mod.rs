//! # Connector Layer
//!
//! External integrations implementing application ports:
//! - Inference (Ollama over HTTP)
//! - Audit logging (tracing events, file sink, in-memory)
//! - The Answer Service client used by the CLI
//! - Entry points: the axum HTTP server and the CLI router

pub mod adapter;
pub mod api;

pub use adapter::*;
