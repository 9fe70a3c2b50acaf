//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid webhook URL format")]
    InvalidWebhookUrl,

    #[error("Webhook URL must use HTTPS in production")]
    WebhookMustBeHttps,

    #[error("Webhook secret must not be empty")]
    EmptyWebhookSecret,

    #[error("Invalid webhook timeout")]
    InvalidWebhookTimeout,

    #[error("Questionnaire file not found: {0}")]
    QuestionnaireNotFound(String),
}
