use std::sync::{Mutex, MutexGuard};

use crate::application::AuditLog;
use crate::domain::{DomainError, Question};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditRecord {
    Question(String),
    Failure { question: String, cause: String },
}

/// Keeps audit records in memory, in arrival order.
#[derive(Debug, Default)]
pub struct InMemoryAuditLog {
    records: Mutex<Vec<AuditRecord>>,
}

impl InMemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<AuditRecord>> {
        // A panic mid-push cannot leave a half-written record behind.
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn records(&self) -> Vec<AuditRecord> {
        self.lock().clone()
    }

    pub fn questions(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|r| match r {
                AuditRecord::Question(q) => Some(q.clone()),
                AuditRecord::Failure { .. } => None,
            })
            .collect()
    }

    pub fn failures(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|r| match r {
                AuditRecord::Failure { cause, .. } => Some(cause.clone()),
                AuditRecord::Question(_) => None,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl AuditLog for InMemoryAuditLog {
    fn record_question(&self, question: &Question) {
        self.lock()
            .push(AuditRecord::Question(question.text().to_string()));
    }

    fn record_failure(&self, question: &Question, cause: &DomainError) {
        self.lock().push(AuditRecord::Failure {
            question: question.text().to_string(),
            cause: cause.to_string(),
        });
    }
}
