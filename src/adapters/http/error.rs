//! HTTP error shape and DomainError -> status mapping.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Error body returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling (SCREAMING_SNAKE).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

/// Error returned from HTTP handlers.
#[derive(Debug)]
pub struct ApiError(DomainError);

impl ApiError {
    pub fn domain(&self) -> &DomainError {
        &self.0
    }

    /// Status code for a domain error code.
    pub fn status_for(code: ErrorCode) -> StatusCode {
        match code {
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                StatusCode::BAD_REQUEST
            }
            ErrorCode::OutOfRange | ErrorCode::InvalidDimension | ErrorCode::InvalidAnswers => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ErrorCode::AssessmentNotFound => StatusCode::NOT_FOUND,
            ErrorCode::NotificationFailed => StatusCode::BAD_GATEWAY,
            ErrorCode::ConfigurationError | ErrorCode::StorageError | ErrorCode::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(DomainError::new(ErrorCode::InvalidFormat, rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self(DomainError::new(ErrorCode::InvalidFormat, rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = Self::status_for(err.code);

        if status.is_server_error() {
            tracing::error!(code = %err.code, error = %err.message, "Request failed");
        } else {
            tracing::debug!(code = %err.code, error = %err.message, "Request rejected");
        }

        // Internal details stay in the logs.
        let body = if status == StatusCode::INTERNAL_SERVER_ERROR {
            ErrorResponse::new(err.code.to_string(), "Internal server error")
        } else if err.details.is_empty() {
            ErrorResponse::new(err.code.to_string(), err.message)
        } else {
            let details = serde_json::to_value(&err.details).unwrap_or_default();
            ErrorResponse::with_details(err.code.to_string(), err.message, details)
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_codes_map_to_client_errors() {
        assert_eq!(
            ApiError::status_for(ErrorCode::EmptyField),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::status_for(ErrorCode::OutOfRange),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::status_for(ErrorCode::InvalidAnswers),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn configuration_error_is_server_error() {
        assert_eq!(
            ApiError::status_for(ErrorCode::ConfigurationError),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = ApiError::from(
            DomainError::new(ErrorCode::AssessmentNotFound, "Assessment not found")
                .with_detail("assessment_id", "abc"),
        )
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn error_response_serializes_without_details_when_none() {
        let json = serde_json::to_string(&ErrorResponse::new("NOT_FOUND", "Not found")).unwrap();
        assert!(!json.contains("details"));
    }

    #[test]
    fn error_response_serializes_with_details_when_present() {
        let response = ErrorResponse::with_details(
            "INVALID_ANSWERS",
            "Missing answer",
            serde_json::json!({"question_id": "d4"}),
        );
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["details"]["question_id"], "d4");
    }
}
