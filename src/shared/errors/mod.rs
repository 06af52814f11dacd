//! Error Types
//!
//! Layered error types with HTTP status code mapping. Store and key-set
//! faults never reach the client in detail; they are logged instead.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Identity verification failures
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Missing Authorization header")]
    MissingToken,

    #[error("Invalid Authorization header format")]
    MalformedToken,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Signing key set unavailable: {0}")]
    KeySetUnavailable(String),
}

impl AuthError {
    /// Message safe to return to the caller
    #[must_use]
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::MissingToken => "Missing Authorization header",
            Self::MalformedToken => "Invalid Authorization header format",
            Self::InvalidToken | Self::KeySetUnavailable(_) => "Invalid or expired token",
        }
    }
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("{resource} not found")]
    NotFound { resource: String, id: String },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Repository(_) => "INTERNAL_ERROR",
        }
    }

    /// Message returned to the caller; repository details stay server side
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Repository(_) => "An unexpected error occurred".to_string(),
            other => other.to_string(),
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Unauthorized(#[from] AuthError),

    #[error("Invalid todo id: {0}")]
    InvalidId(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level error for validation errors
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            ApiError::UseCase(uc_error) => {
                if let UseCaseError::Repository(err) = uc_error {
                    tracing::error!(error = %err, "Data store failure");
                }
                let details = if let UseCaseError::Validation(errors) = uc_error {
                    Some(
                        errors
                            .iter()
                            .map(|e| {
                                let (field, message) = e.split_once(": ").unwrap_or(("", e.as_str()));
                                FieldError {
                                    field: field.to_string(),
                                    message: message.to_string(),
                                }
                            })
                            .collect(),
                    )
                } else {
                    None
                };
                (
                    uc_error.status_code(),
                    uc_error.error_code().to_string(),
                    uc_error.public_message(),
                    details,
                )
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST".to_string(), msg.clone(), None),
            ApiError::Unauthorized(auth_error) => {
                if let AuthError::KeySetUnavailable(reason) = auth_error {
                    tracing::error!(%reason, "Could not obtain signing keys");
                } else {
                    tracing::debug!(error = %auth_error, "Rejected bearer token");
                }
                (
                    StatusCode::UNAUTHORIZED,
                    "UNAUTHORIZED".to_string(),
                    auth_error.public_message().to_string(),
                    None,
                )
            }
            ApiError::InvalidId(msg) => (StatusCode::BAD_REQUEST, "INVALID_ID".to_string(), msg.clone(), None),
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR".to_string(),
                    "An unexpected error occurred".to_string(),
                    None,
                )
            }
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code,
                message,
                details,
            },
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<std::num::ParseIntError> for ApiError {
    fn from(err: std::num::ParseIntError) -> Self {
        ApiError::InvalidId(err.to_string())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidId(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.as_ref().map_or("invalid", |m| m.as_ref())
                    )
                })
            })
            .collect();
        ApiError::UseCase(UseCaseError::Validation(messages))
    }
}
