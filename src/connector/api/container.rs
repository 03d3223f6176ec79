use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::application::{
    AnswerQuestionUseCase, AssistantClient, AuditLog, ConverseUseCase, InferenceBackend,
};
use crate::connector::{
    HttpAssistantClient, OllamaClient, TracingAuditLog, DEFAULT_BACKEND_TIMEOUT,
    DEFAULT_OLLAMA_MODEL, DEFAULT_OLLAMA_URL, DEFAULT_SERVER_URL,
};
use crate::domain::{DomainClassifier, KeywordClassifier};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_AUDIT_LOG: &str = "backend_audit.log";

/// Startup configuration. Read once; nothing here changes while running.
#[derive(Debug, Clone)]
pub struct ContainerConfig {
    /// Address the Answer Service listens on.
    pub bind_addr: String,
    /// Base URL of the Ollama server.
    pub ollama_url: String,
    pub model: String,
    pub audit_log: PathBuf,
    pub backend_timeout: Duration,
    /// Base URL of the Answer Service, for the client commands.
    pub server_url: String,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            model: DEFAULT_OLLAMA_MODEL.to_string(),
            audit_log: PathBuf::from(DEFAULT_AUDIT_LOG),
            backend_timeout: DEFAULT_BACKEND_TIMEOUT,
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

pub struct Container {
    classifier: Arc<dyn DomainClassifier>,
    backend: Arc<dyn InferenceBackend>,
    audit_log: Arc<dyn AuditLog>,
    assistant_client: Arc<dyn AssistantClient>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        debug!(
            "Using Ollama at {} with model {}",
            config.ollama_url, config.model
        );
        let backend = Arc::new(
            OllamaClient::new(&config.ollama_url, &config.model)
                .with_timeout(config.backend_timeout),
        );
        let assistant_client = Arc::new(HttpAssistantClient::new(&config.server_url));

        Self {
            classifier: Arc::new(KeywordClassifier::banking()),
            backend,
            audit_log: Arc::new(TracingAuditLog::new()),
            assistant_client,
            config,
        }
    }

    pub fn with_backend(mut self, backend: Arc<dyn InferenceBackend>) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_audit_log(mut self, audit_log: Arc<dyn AuditLog>) -> Self {
        self.audit_log = audit_log;
        self
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn DomainClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_assistant_client(mut self, client: Arc<dyn AssistantClient>) -> Self {
        self.assistant_client = client;
        self
    }

    pub fn answer_use_case(&self) -> AnswerQuestionUseCase {
        AnswerQuestionUseCase::new(
            self.classifier.clone(),
            self.backend.clone(),
            self.audit_log.clone(),
        )
    }

    pub fn converse_use_case(&self) -> ConverseUseCase {
        ConverseUseCase::new(self.assistant_client.clone())
    }

    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }
}
