use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::services::extractor::ExtractionError;
use crate::services::model_client::ModelError;
use crate::services::question_validator::ValidationError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("No active attempt: {0}")]
    NoActiveAttempt(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

}

/// Reasons a generated question set was rejected. Never leaves `QuizService`.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("model unavailable: {0}")]
    ModelUnavailable(#[from] ModelError),

    #[error("extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("candidate {index} rejected: {source}")]
    Validation {
        index: usize,
        #[source]
        source: ValidationError,
    },

    #[error("expected {expected} questions, model returned {got}")]
    TooFewQuestions { expected: usize, got: usize },
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self {
            Error::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Error::NoActiveAttempt(msg) => (StatusCode::BAD_REQUEST, msg),
            Error::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Error::Database(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred".to_string(),
            ),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
