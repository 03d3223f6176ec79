pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    AnswerQuestionUseCase, AssistantClient, AuditLog, ConverseUseCase, InferenceBackend,
    CONNECTION_WARNING,
};

pub use cli::{Cli, Commands};

pub use connector::api::{build_app, Container, ContainerConfig, Router};
pub use connector::{
    AuditRecord, HttpAssistantClient, InMemoryAuditLog, OllamaClient, TracingAuditLog,
    NO_REPLY_MESSAGE,
};

pub use domain::{
    Answer, ChatSession, DomainClassifier, DomainError, GenerationOptions, KeywordClassifier,
    Message, Prompt, Question, Sender, Thread, REFUSAL_MESSAGE,
};
