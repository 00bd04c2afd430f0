//! HTTP API
//!
//! Typed client for the chatbot REST API.

pub mod client;

pub use client::{ApiClient, ApiError, ConversationStatus, ServerConfig};
