//! Domain services containing core business logic.

mod banking_keywords;
mod domain_classifier;

pub use banking_keywords::*;
pub use domain_classifier::*;
