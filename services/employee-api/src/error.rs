//! API error type with `IntoResponse`.
//!
//! Bodies follow the `{"detail": ...}` convention: a string for 404, 409, 413
//! and 500, a list of [`ValidationDetail`] entries for 422.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

use staffdesk_database::RepositoryError;
use staffdesk_utils::{format_validation_errors, validation_details, ValidationDetail};

pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found";
pub const EMAIL_ALREADY_REGISTERED: &str = "Email already registered";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or invalid request (422)
    #[error("request validation failed")]
    Validation(Vec<ValidationDetail>),

    /// Unknown identifier (404)
    #[error("{0}")]
    NotFound(&'static str),

    /// Unique constraint hit (409)
    #[error("{0}")]
    Conflict(&'static str),

    /// Body over the configured size cap (413)
    #[error("{0}")]
    PayloadTooLarge(String),

    /// Storage failure (500, logged)
    #[error("storage error: {0}")]
    Storage(#[source] RepositoryError),
}

impl ApiError {
    pub fn employee_not_found() -> Self {
        Self::NotFound(EMPLOYEE_NOT_FOUND)
    }

    /// Short label used as the metrics outcome.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::NotFound(_) => "not_found",
            Self::Conflict(_) => "conflict",
            Self::PayloadTooLarge(_) => "payload_too_large",
            Self::Storage(_) => "internal_error",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            Self::Validation(details) => json!({ "detail": details }),
            Self::NotFound(message) | Self::Conflict(message) => json!({ "detail": message }),
            Self::PayloadTooLarge(message) => json!({ "detail": message }),
            Self::Storage(error) => {
                tracing::error!(error = %error, "Storage operation failed");
                json!({ "detail": "Internal Server Error" })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::DuplicateEmail { .. } => Self::Conflict(EMAIL_ALREADY_REGISTERED),
            RepositoryError::Database(_) => Self::Storage(error),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        tracing::debug!(errors = %format_validation_errors(&errors), "Payload failed validation");
        Self::Validation(validation_details(&errors))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return Self::PayloadTooLarge(rejection.body_text());
        }

        let kind = match &rejection {
            JsonRejection::JsonDataError(_) => "json_data",
            JsonRejection::JsonSyntaxError(_) => "json_invalid",
            JsonRejection::MissingJsonContentType(_) => "content_type",
            _ => "body",
        };
        Self::Validation(vec![ValidationDetail::new(
            &["body"],
            rejection.body_text(),
            kind,
        )])
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation(vec![ValidationDetail::new(
            &["path", "emp_id"],
            rejection.body_text(),
            "path_parsing",
        )])
    }
}
