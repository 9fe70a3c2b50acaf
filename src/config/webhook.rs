//! Webhook notification configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::Environment;

/// Outbound webhook for completed assessments.
///
/// Notification is disabled when `url` is absent.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookConfig {
    /// Receiver URL
    pub url: Option<String>,

    /// HMAC-SHA256 signing secret
    pub secret: Option<SecretString>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl WebhookConfig {
    pub fn is_enabled(&self) -> bool {
        self.url.is_some()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate webhook configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if let Some(url) = &self.url {
            let is_https = url.starts_with("https://");
            if !is_https && !url.starts_with("http://") {
                return Err(ValidationError::InvalidWebhookUrl);
            }
            if *environment == Environment::Production && !is_https {
                return Err(ValidationError::WebhookMustBeHttps);
            }
        }

        if let Some(secret) = &self.secret {
            if secret.expose_secret().trim().is_empty() {
                return Err(ValidationError::EmptyWebhookSecret);
            }
        }

        if self.timeout_secs == 0 || self.timeout_secs > 60 {
            return Err(ValidationError::InvalidWebhookTimeout);
        }

        Ok(())
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: None,
            secret: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> WebhookConfig {
        WebhookConfig {
            url: Some(url.to_string()),
            secret: Some(SecretString::new("whsec_xxx".to_string())),
            timeout_secs: default_timeout(),
        }
    }

    #[test]
    fn test_disabled_without_url() {
        let config = WebhookConfig::default();
        assert!(!config.is_enabled());
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.validate(&Environment::Production).is_ok());
    }

    #[test]
    fn test_http_allowed_outside_production() {
        let config = config("http://localhost:9000/hooks");
        assert!(config.is_enabled());
        assert!(config.validate(&Environment::Development).is_ok());
        assert_eq!(
            config.validate(&Environment::Production),
            Err(ValidationError::WebhookMustBeHttps)
        );
    }

    #[test]
    fn test_https_allowed_in_production() {
        assert!(config("https://hooks.example.com/valid")
            .validate(&Environment::Production)
            .is_ok());
    }

    #[test]
    fn test_invalid_url_scheme() {
        assert_eq!(
            config("ftp://example.com").validate(&Environment::Development),
            Err(ValidationError::InvalidWebhookUrl)
        );
    }

    #[test]
    fn test_blank_secret_rejected() {
        let mut config = config("https://hooks.example.com");
        config.secret = Some(SecretString::new("  ".to_string()));
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::EmptyWebhookSecret)
        );
    }

    #[test]
    fn test_timeout_bounds() {
        let mut config = config("https://hooks.example.com");
        config.timeout_secs = 0;
        assert!(config.validate(&Environment::Development).is_err());
        config.timeout_secs = 61;
        assert!(config.validate(&Environment::Development).is_err());
        config.timeout_secs = 60;
        assert!(config.validate(&Environment::Development).is_ok());
    }

    #[test]
    fn test_secret_is_redacted_in_debug() {
        let rendered = format!("{:?}", config("https://hooks.example.com"));
        assert!(!rendered.contains("whsec_xxx"));
    }
}
