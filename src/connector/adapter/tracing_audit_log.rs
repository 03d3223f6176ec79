use std::fs::OpenOptions;
use std::path::Path;

use tracing::{error, info, Level, Subscriber};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::filter::Targets;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, Layer};

use crate::application::AuditLog;
use crate::domain::{DomainError, Question};

/// Tracing target carrying audit events. Only events on this target reach
/// the audit file.
pub const AUDIT_TARGET: &str = "audit";

/// [`AuditLog`] that emits tracing events on [`AUDIT_TARGET`]. Where they end
/// up is decided by the subscriber, normally [`audit_layer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuditLog;

impl TracingAuditLog {
    pub fn new() -> Self {
        Self
    }
}

impl AuditLog for TracingAuditLog {
    fn record_question(&self, question: &Question) {
        info!(target: AUDIT_TARGET, "USER QUESTION: {}", question);
    }

    fn record_failure(&self, question: &Question, cause: &DomainError) {
        error!(target: AUDIT_TARGET, "BACKEND FAILURE: {} (question: {})", cause, question);
    }
}

/// Open `path` for appending and hand it to a background writer thread.
///
/// The returned guard flushes pending lines when dropped and must outlive
/// the server. Each event is written as one line in one write call, so
/// concurrent requests never interleave within a line.
pub fn audit_writer(path: &Path) -> Result<(NonBlocking, WorkerGuard), DomainError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(tracing_appender::non_blocking(file))
}

/// Plain-text `timestamp LEVEL message` lines for audit events only.
pub fn audit_layer<S>(writer: NonBlocking) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_filter(Targets::new().with_target(AUDIT_TARGET, Level::INFO))
}
