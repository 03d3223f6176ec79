use crate::domain::{DomainError, Question};

/// Append-only record of incoming questions and backend failures.
///
/// Writes are best-effort: implementations must not block the caller for
/// long and must never fail the request they describe.
pub trait AuditLog: Send + Sync {
    fn record_question(&self, question: &Question);

    fn record_failure(&self, question: &Question, cause: &DomainError);
}
