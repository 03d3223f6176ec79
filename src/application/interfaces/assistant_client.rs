use async_trait::async_trait;

use crate::domain::DomainError;

/// The client side of the Answer Service: sends one message, gets one reply.
#[async_trait]
pub trait AssistantClient: Send + Sync {
    /// Transport failures are reported as [`DomainError::ConnectionError`].
    async fn ask(&self, message: &str) -> Result<String, DomainError>;
}
