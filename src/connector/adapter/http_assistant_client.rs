use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::AssistantClient;
use crate::domain::DomainError;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_CLIENT_TIMEOUT: Duration = Duration::from_secs(180);
/// Shown when the server answered without a `reply` (e.g. a 400 or 500 body).
pub const NO_REPLY_MESSAGE: &str = "No reply from backend.";
const CHAT_PATH: &str = "/api/chat";

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    reply: Option<String>,
}

/// Talks to a running Answer Service over `POST /api/chat`.
pub struct HttpAssistantClient {
    client: reqwest::Client,
    url: String,
}

impl HttpAssistantClient {
    pub fn new(server_url: impl Into<String>) -> Self {
        let base: String = server_url.into();
        Self {
            client: reqwest::Client::builder()
                .timeout(DEFAULT_CLIENT_TIMEOUT)
                .build()
                .unwrap_or_default(),
            url: format!("{}{}", base.trim_end_matches('/'), CHAT_PATH),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl AssistantClient for HttpAssistantClient {
    async fn ask(&self, message: &str) -> Result<String, DomainError> {
        let response = self
            .client
            .post(&self.url)
            .json(&ChatRequest { message })
            .send()
            .await
            .map_err(|e| DomainError::connection(format!("request to {} failed: {e}", self.url)))?;

        let status = response.status();
        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| DomainError::connection(format!("unreadable reply ({status}): {e}")))?;

        debug!("Answer service responded with {}", status);
        Ok(body.reply.unwrap_or_else(|| NO_REPLY_MESSAGE.to_string()))
    }
}
