//! HTTP surface of the Answer Service.

mod error;
mod routes;

pub use error::ApiError;
pub use routes::{build_app, AppState, ChatRequest, ChatResponse};
