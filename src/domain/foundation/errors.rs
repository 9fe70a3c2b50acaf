//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur while validating assessment input.
///
/// Every variant is raised before any computation runs; a caller must not
/// proceed with a classification built on input that failed validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Dimension '{dimension}' is missing from the scores")]
    MissingDimension { dimension: String },

    #[error("'{key}' is not a recognized dimension")]
    UnknownDimension { key: String },

    #[error("Question '{question_id}' is not part of the questionnaire")]
    UnknownQuestion { question_id: String },

    #[error("Question '{question_id}' has no answer")]
    MissingAnswer { question_id: String },

    #[error("Question '{question_id}' is defined more than once")]
    DuplicateQuestion { question_id: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn missing_dimension(dimension: impl Into<String>) -> Self {
        ValidationError::MissingDimension {
            dimension: dimension.into(),
        }
    }

    pub fn unknown_dimension(key: impl Into<String>) -> Self {
        ValidationError::UnknownDimension { key: key.into() }
    }

    pub fn unknown_question(question_id: impl Into<String>) -> Self {
        ValidationError::UnknownQuestion {
            question_id: question_id.into(),
        }
    }

    pub fn missing_answer(question_id: impl Into<String>) -> Self {
        ValidationError::MissingAnswer {
            question_id: question_id.into(),
        }
    }

    pub fn duplicate_question(question_id: impl Into<String>) -> Self {
        ValidationError::DuplicateQuestion {
            question_id: question_id.into(),
        }
    }

    /// Returns the error code matching this variant.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            ValidationError::MissingDimension { .. } | ValidationError::UnknownDimension { .. } => {
                ErrorCode::InvalidDimension
            }
            ValidationError::UnknownQuestion { .. }
            | ValidationError::MissingAnswer { .. }
            | ValidationError::DuplicateQuestion { .. } => ErrorCode::InvalidAnswers,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    OutOfRange,
    InvalidFormat,
    InvalidDimension,
    InvalidAnswers,

    // Not found errors
    AssessmentNotFound,

    // Catalog/data inconsistencies
    ConfigurationError,

    // Infrastructure errors
    StorageError,
    NotificationFailed,
    InternalError,
}

impl ErrorCode {
    /// Returns true for codes raised by input validation.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ErrorCode::ValidationFailed
                | ErrorCode::EmptyField
                | ErrorCode::OutOfRange
                | ErrorCode::InvalidFormat
                | ErrorCode::InvalidDimension
                | ErrorCode::InvalidAnswers
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::InvalidDimension => "INVALID_DIMENSION",
            ErrorCode::InvalidAnswers => "INVALID_ANSWERS",
            ErrorCode::AssessmentNotFound => "ASSESSMENT_NOT_FOUND",
            ErrorCode::ConfigurationError => "CONFIGURATION_ERROR",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::NotificationFailed => "NOTIFICATION_FAILED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message).with_detail("field", field.into())
    }

    /// Creates a configuration error for catalog/data inconsistencies.
    ///
    /// Not recoverable by retry.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigurationError, message)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("respondent");
        assert_eq!(format!("{}", err), "Field 'respondent' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("answer", 1.0, 5.0, 7.0);
        assert_eq!(
            format!("{}", err),
            "Field 'answer' must be between 1 and 5, got 7"
        );
    }

    #[test]
    fn validation_error_out_of_range_keeps_fraction() {
        let err = ValidationError::out_of_range("V", 0.0, 100.0, 100.5);
        assert_eq!(
            format!("{}", err),
            "Field 'V' must be between 0 and 100, got 100.5"
        );
    }

    #[test]
    fn validation_error_missing_answer_displays_question() {
        let err = ValidationError::missing_answer("v3");
        assert_eq!(format!("{}", err), "Question 'v3' has no answer");
    }

    #[test]
    fn validation_error_codes_are_validation_codes() {
        let errors = [
            ValidationError::empty_field("x"),
            ValidationError::out_of_range("x", 0.0, 1.0, 2.0),
            ValidationError::invalid_format("x", "bad"),
            ValidationError::missing_dimension("V"),
            ValidationError::unknown_dimension("Q"),
            ValidationError::unknown_question("zz"),
            ValidationError::missing_answer("v1"),
            ValidationError::duplicate_question("v1"),
        ];
        for err in errors {
            assert!(err.code().is_validation(), "{:?}", err);
        }
    }

    #[test]
    fn domain_error_from_validation_error_keeps_message() {
        let err: DomainError = ValidationError::missing_dimension("D").into();
        assert_eq!(err.code, ErrorCode::InvalidDimension);
        assert_eq!(err.message, "Dimension 'D' is missing from the scores");
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::configuration("persona 'x' is not in the catalog");
        assert_eq!(
            format!("{}", err),
            "[CONFIGURATION_ERROR] persona 'x' is not in the catalog"
        );
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::validation("answers", "Answers are incomplete")
            .with_detail("missing", "d4");

        assert_eq!(err.details.get("field"), Some(&"answers".to_string()));
        assert_eq!(err.details.get("missing"), Some(&"d4".to_string()));
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::AssessmentNotFound), "ASSESSMENT_NOT_FOUND");
        assert_eq!(format!("{}", ErrorCode::InternalError), "INTERNAL_ERROR");
        assert!(!ErrorCode::ConfigurationError.is_validation());
    }
}
