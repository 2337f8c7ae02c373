use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("No JSON object found in model reply")]
    NoJsonFound,

    #[error("Model reply could not be parsed as JSON: {0}")]
    UnparsableJson(String),

    #[error("Schema violation: {0}")]
    SchemaViolation(String),

    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Model error: {0}")]
    ModelError(String),

    #[error("Quiz generation failed after {attempts} attempt(s): {source}")]
    GenerationFailed {
        attempts: u32,
        #[source]
        source: Box<AppError>,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Document error: {0}")]
    DocumentError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::NoJsonFound => "NO_JSON_FOUND",
            AppError::UnparsableJson(_) => "UNPARSABLE_JSON",
            AppError::SchemaViolation(_) => "SCHEMA_VIOLATION",
            AppError::ModelUnavailable(_) => "MODEL_UNAVAILABLE",
            AppError::ModelError(_) => "MODEL_ERROR",
            AppError::GenerationFailed { .. } => "GENERATION_FAILED",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::DocumentError(_) => "DOCUMENT_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NoJsonFound
            | AppError::UnparsableJson(_)
            | AppError::SchemaViolation(_)
            | AppError::ModelError(_) => StatusCode::BAD_GATEWAY,
            AppError::ModelUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            // Terminal failures surface with the status of whatever broke the
            // final attempt.
            AppError::GenerationFailed { source, .. } => source.status_code(),
            AppError::ValidationError(_) | AppError::DocumentError(_) => StatusCode::BAD_REQUEST,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
