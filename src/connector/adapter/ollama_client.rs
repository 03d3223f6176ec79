use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::InferenceBackend;
use crate::domain::{DomainError, GenerationOptions, Prompt};

/// Default target: Ollama running locally on its standard port.
pub const DEFAULT_OLLAMA_URL: &str = "http://127.0.0.1:11434";
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3";
/// Upper bound for a whole generate call, connection included.
pub const DEFAULT_BACKEND_TIMEOUT: Duration = Duration::from_secs(120);
const GENERATE_PATH: &str = "/api/generate";

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: &'a GenerationOptions,
}

/// Only `response` is consumed; Ollama sends timing and context fields too.
#[derive(Deserialize)]
struct GenerateResponse {
    response: Option<String>,
}

/// HTTP client for the Ollama `/api/generate` endpoint, non-streaming.
///
/// Any failure is reported as [`DomainError::BackendError`] carrying the
/// cause, for the server log. Callers decide how much of it to expose.
pub struct OllamaClient {
    client: reqwest::Client,
    model: String,
    /// Full endpoint URL (base + GENERATE_PATH).
    url: String,
    timeout: Duration,
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), GENERATE_PATH);
        Self {
            client: Self::build_client(DEFAULT_BACKEND_TIMEOUT),
            model: model.into(),
            url,
            timeout: DEFAULT_BACKEND_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = Self::build_client(timeout);
        self.timeout = timeout;
        self
    }

    fn build_client(timeout: Duration) -> reqwest::Client {
        reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl InferenceBackend for OllamaClient {
    async fn generate(
        &self,
        prompt: &Prompt,
        options: &GenerationOptions,
    ) -> Result<String, DomainError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt: prompt.as_str(),
            stream: false,
            options,
        };

        debug!("OllamaClient: POST {} (model {})", self.url, self.model);

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DomainError::backend(format!(
                        "OllamaClient: no response within {:?}: {e}",
                        self.timeout
                    ))
                } else {
                    DomainError::backend(format!("OllamaClient: request failed: {e}"))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("OllamaClient: server returned {status}: {body}");
            return Err(DomainError::backend(format!(
                "OllamaClient: server returned {status}"
            )));
        }

        let generated: GenerateResponse = response.json().await.map_err(|e| {
            DomainError::backend(format!("OllamaClient: failed to parse response: {e}"))
        })?;

        generated.response.ok_or_else(|| {
            DomainError::backend("OllamaClient: response body has no `response` field")
        })
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
