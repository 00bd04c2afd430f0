//! HTTP API Client
//!
//! Functions for communicating with the chatbot REST API. One `ApiClient`
//! is created at startup and handed to the panels through context, so the
//! API boundary stays an injected dependency rather than a global.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::state::global::{Appointment, ConversationMessage, StatisticsSnapshot};
use crate::storage;

/// Errors surfaced by API calls.
///
/// Every failure aborts the operation that issued it; there is no retry,
/// no timeout and no caching — every call is a fresh round trip.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {text}")]
    Status { status: u16, text: String },
    #[error("invalid response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Server-held configuration with the auth token masked to a boolean.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub twilio_sid: String,
    #[serde(default)]
    pub whatsapp_number: String,
    #[serde(default)]
    pub has_token: bool,
}

/// Conversation state label from `GET /conversa/status/{user_id}`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct ConversationStatus {
    #[serde(rename = "estado")]
    pub state: String,
}

/// HTTP client for the chatbot API.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Client for a fixed base URL; a trailing slash is normalized away.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Client pointed at the stored base URL (or the default).
    pub fn from_storage() -> Self {
        Self::new(storage::api_base())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path))
            .header("Content-Type", "application/json")
            .send()
            .await?;

        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
                text: response.status_text(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let response = Request::post(&self.url(path))
            .header("Content-Type", "application/json")
            .send()
            .await?;

        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
                text: response.status_text(),
            });
        }

        Ok(())
    }

    /// Liveness probe; the body is ignored beyond success or failure.
    pub async fn health(&self) -> Result<(), ApiError> {
        self.get_json::<serde_json::Value>("/health").await?;
        Ok(())
    }

    pub async fn statistics(&self) -> Result<StatisticsSnapshot, ApiError> {
        self.get_json("/estatisticas").await
    }

    pub async fn config(&self) -> Result<ServerConfig, ApiError> {
        self.get_json("/config").await
    }

    pub async fn conversation_history(
        &self,
        user_id: &str,
    ) -> Result<Vec<ConversationMessage>, ApiError> {
        self.get_json(&format!("/historico/{user_id}")).await
    }

    pub async fn conversation_status(&self, user_id: &str) -> Result<ConversationStatus, ApiError> {
        self.get_json(&format!("/conversa/status/{user_id}")).await
    }

    pub async fn restart_conversation(&self, user_id: &str) -> Result<(), ApiError> {
        self.post_empty(&format!("/conversa/reiniciar/{user_id}"))
            .await
    }

    pub async fn appointments(&self) -> Result<Vec<Appointment>, ApiError> {
        self.get_json("/consultas").await
    }

    /// Appointments for a single user, filtered server-side. Part of the
    /// API contract; no panel flow uses it yet.
    #[allow(dead_code)]
    pub async fn user_appointments(&self, user_id: &str) -> Result<Vec<Appointment>, ApiError> {
        self.get_json(&format!("/consultas/{user_id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_apply_when_fields_are_missing() {
        let config: ServerConfig = serde_json::from_str(r#"{"twilio_sid": "AC42"}"#).unwrap();
        assert_eq!(config.twilio_sid, "AC42");
        assert_eq!(config.whatsapp_number, "");
        assert!(!config.has_token);
    }

    #[test]
    fn status_reads_the_estado_field() {
        let status: ConversationStatus =
            serde_json::from_str(r#"{"estado": "agendando"}"#).unwrap();
        assert_eq!(status.state, "agendando");
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("http://localhost:5000/");
        assert_eq!(client.url("/health"), "http://localhost:5000/health");
    }
}
