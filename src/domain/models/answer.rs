/// Reply returned for questions outside the banking domain.
pub const REFUSAL_MESSAGE: &str = "I can answer only banking-related questions.";

/// Outcome of a successfully handled question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// The question was out of domain; the backend was not contacted.
    Refused,
    /// Text generated by the inference backend, already trimmed.
    Generated(String),
}

impl Answer {
    pub fn text(&self) -> &str {
        match self {
            Self::Refused => REFUSAL_MESSAGE,
            Self::Generated(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Refused => REFUSAL_MESSAGE.to_string(),
            Self::Generated(text) => text,
        }
    }

    pub fn is_refused(&self) -> bool {
        matches!(self, Self::Refused)
    }
}
