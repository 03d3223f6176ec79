mod assistant_client;
mod audit_log;
mod inference_backend;

pub use assistant_client::*;
pub use audit_log::*;
pub use inference_backend::*;
