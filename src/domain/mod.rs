//! # Domain Layer
//!
//! Questions, prompts, answers, conversations and the domain classifier.
//! This layer performs no I/O and knows nothing about HTTP or logging sinks.

mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
