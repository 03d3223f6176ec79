use async_trait::async_trait;

use crate::domain::{DomainError, GenerationOptions, Prompt};

/// A language-model server that turns a prompt into text.
///
/// Implementors own transport and wire format. Every failure (unreachable
/// host, timeout, non-success status, unreadable body) is reported as
/// [`DomainError::BackendError`].
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Generate a completion for `prompt`. The text is returned untrimmed.
    async fn generate(
        &self,
        prompt: &Prompt,
        options: &GenerationOptions,
    ) -> Result<String, DomainError>;

    fn model_name(&self) -> &str;
}
