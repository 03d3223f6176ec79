mod http_assistant_client;
mod in_memory_audit_log;
mod ollama_client;
mod tracing_audit_log;

pub use http_assistant_client::*;
pub use in_memory_audit_log::*;
pub use ollama_client::*;
pub use tracing_audit_log::*;
