use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::domain::DomainError;

const EMPTY_MESSAGE_DETAIL: &str = "Empty message";
const INTERNAL_ERROR_DETAIL: &str = "Internal Server Error";

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

/// What a client gets to see of a failure. Only blank input is reported as
/// such; every other error collapses into a generic 500.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    EmptyMessage,
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::EmptyMessage => StatusCode::BAD_REQUEST,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn detail(&self) -> &'static str {
        match self {
            Self::EmptyMessage => EMPTY_MESSAGE_DETAIL,
            Self::Internal => INTERNAL_ERROR_DETAIL,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        if err.is_empty_input() {
            return Self::EmptyMessage;
        }
        error!("Request failed: {}", err);
        Self::Internal
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.detail().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_maps_to_400() {
        let err = ApiError::from(DomainError::EmptyInput);
        assert_eq!(err, ApiError::EmptyMessage);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.detail(), "Empty message");
    }

    #[test]
    fn test_everything_else_maps_to_generic_500() {
        for source in [
            DomainError::backend("OllamaClient: server returned 503"),
            DomainError::internal("boom"),
            DomainError::connection("refused"),
        ] {
            let err = ApiError::from(source);
            assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(err.detail(), "Internal Server Error");
        }
    }
}
