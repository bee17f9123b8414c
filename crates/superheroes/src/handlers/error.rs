//! Error responses for the JSON API.
//!
//! Two envelopes are in use: missing rows answer `{"error": "<message>"}`
//! and rejected input answers `{"errors": ["validation errors"]}`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use superheroes_core::heroes::ValidationError;
use superheroes_core::storage::{repository_error_to_status_code, RepositoryError};

pub const HERO_NOT_FOUND: &str = "Hero not found";
pub const POWER_NOT_FOUND: &str = "Power not found";
pub const HERO_OR_POWER_NOT_FOUND: &str = "Hero or Power not found";

/// The single message returned for every validation failure.
pub const VALIDATION_ERRORS: &str = "validation errors";

#[derive(Debug)]
pub enum ApiError {
    /// A referenced row does not exist.
    NotFound(&'static str),
    /// A field failed validation.
    Validation(ValidationError),
    /// The body was not a JSON object of the expected shape.
    InvalidBody(JsonRejection),
    /// Storage failed.
    Repository(RepositoryError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Validation(err) => {
                tracing::warn!(error = %err, "Validation failed");
                validation_errors()
            }
            ApiError::InvalidBody(rejection) => {
                tracing::warn!(error = %rejection.body_text(), "Rejected request body");
                validation_errors()
            }
            ApiError::Repository(err) => {
                let status = StatusCode::from_u16(repository_error_to_status_code(&err))
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                tracing::error!(error = %err, status = %status, "Repository error");

                // Constraint violations surface with the same body as rejected input.
                if status == StatusCode::BAD_REQUEST {
                    return validation_errors();
                }

                let message = if status.is_server_error() {
                    "Internal server error".to_string()
                } else {
                    err.to_string()
                };
                (status, Json(json!({ "error": message }))).into_response()
            }
        }
    }
}

fn validation_errors() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "errors": [VALIDATION_ERRORS] })),
    )
        .into_response()
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        Self::Repository(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection)
    }
}
