use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::application::{AuditLog, InferenceBackend};
use crate::domain::{
    Answer, DomainClassifier, DomainError, GenerationOptions, Prompt, Question,
};

/// Answers a single question: validate, audit, classify, then either refuse
/// or ask the inference backend.
///
/// Holds only shared read-only collaborators, so one instance serves any
/// number of concurrent requests.
pub struct AnswerQuestionUseCase {
    classifier: Arc<dyn DomainClassifier>,
    backend: Arc<dyn InferenceBackend>,
    audit_log: Arc<dyn AuditLog>,
    options: GenerationOptions,
}

impl AnswerQuestionUseCase {
    pub fn new(
        classifier: Arc<dyn DomainClassifier>,
        backend: Arc<dyn InferenceBackend>,
        audit_log: Arc<dyn AuditLog>,
    ) -> Self {
        Self {
            classifier,
            backend,
            audit_log,
            options: GenerationOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    pub async fn execute(&self, raw: &str) -> Result<Answer, DomainError> {
        let question = Question::parse(raw)?;
        self.audit_log.record_question(&question);

        if !self.classifier.is_in_domain(question.text()) {
            debug!("Refusing out-of-domain question: {}", question);
            return Ok(Answer::Refused);
        }

        let prompt = Prompt::for_question(&question);
        let start_time = Instant::now();

        let result = self
            .backend
            .generate(&prompt, &self.options)
            .await
            .and_then(|text| {
                let reply = text.trim();
                if reply.is_empty() {
                    Err(DomainError::backend("inference backend returned an empty response"))
                } else {
                    Ok(reply.to_string())
                }
            });

        match result {
            Ok(reply) => {
                info!(
                    "Answered with {} in {:?} ({} chars)",
                    self.backend.model_name(),
                    start_time.elapsed(),
                    reply.len()
                );
                Ok(Answer::Generated(reply))
            }
            Err(e) => {
                warn!("Inference failed after {:?}: {}", start_time.elapsed(), e);
                self.audit_log.record_failure(&question, &e);
                Err(e)
            }
        }
    }
}
