//! Application error type and its HTTP representation.
//!
//! Every handler returns `Result<_, AppError>`. Client errors carry a specific
//! message; internal errors are logged once here, when they become a response,
//! and reach the caller only as a generic "Database failure".

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

/// Message returned for every internal failure.
pub const INTERNAL_MESSAGE: &str = "Database failure";

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// The request cannot be honoured as sent (400).
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// The addressed camp, talk or speaker does not exist (404).
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// The store or the process failed (500). `cause` is logged, never returned.
    #[error("{message}: {cause}")]
    Internal { message: String, cause: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn internal(cause: impl ToString) -> Self {
        Self::Internal {
            message: INTERNAL_MESSAGE.to_string(),
            cause: cause.to_string(),
        }
    }

    /// The store accepted a mutation but reported that nothing was saved.
    pub fn unsaved() -> Self {
        Self::bad_request("Changes could not be saved", json!({}))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into the payload sent to clients.
    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            AppError::Validation { message, details } => ErrorInfo {
                code: "validation_error",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::NotFound { message, details } => ErrorInfo {
                code: "not_found",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::Internal { message, .. } => ErrorInfo {
                code: "internal_error",
                message: message.clone(),
                details: json!({}),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal { cause, .. } = &self {
            tracing::error!(cause = %cause, "Request failed");
        }

        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::internal(e)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::bad_request(
            "Validation failed",
            serde_json::to_value(&errors).unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("Moniker in use", json!({})).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("missing", json!({})).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::internal("connection refused").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(AppError::unsaved().status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_error_hides_cause() {
        let info = AppError::internal("relation \"camps\" does not exist").to_error_info();

        assert_eq!(info.code, "internal_error");
        assert_eq!(info.message, INTERNAL_MESSAGE);
        assert_eq!(info.details, json!({}));
    }

    #[test]
    fn test_sqlx_errors_are_internal() {
        let err: AppError = sqlx::Error::RowNotFound.into();

        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[test]
    fn test_client_error_keeps_message_and_details() {
        let info =
            AppError::not_found("Talk with 9 could not be found", json!({"id": 9})).to_error_info();

        assert_eq!(info.code, "not_found");
        assert_eq!(info.message, "Talk with 9 could not be found");
        assert_eq!(info.details["id"], 9);
    }
}
