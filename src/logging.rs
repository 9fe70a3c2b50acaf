//! Logging infrastructure using tracing + tracing-subscriber
//!
//! - `RUST_LOG` overrides the configured `log_level` directive
//! - JSON lines in production, compact human output elsewhere

use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use crate::config::ServerConfig;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter '{directive}': {reason}")]
    InvalidFilter { directive: String, reason: String },

    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Initialize the global subscriber. Call once, before anything logs.
pub fn init_logging(server: &ServerConfig) -> Result<(), LoggingError> {
    let filter = build_env_filter(&server.log_level)?;
    let json = server.is_production();

    tracing_subscriber::registry()
        .with(filter)
        .with(build_console_layer(json))
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;

    tracing::info!(
        filter = %server.log_level,
        json,
        environment = ?server.environment,
        "Logging initialized"
    );
    Ok(())
}

/// RUST_LOG when set, the configured directive otherwise.
fn build_env_filter(configured: &str) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(configured).map_err(|e| LoggingError::InvalidFilter {
        directive: configured.to_string(),
        reason: e.to_string(),
    })
}

fn build_console_layer<S>(json: bool) -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    if json {
        Box::new(
            fmt::layer()
                .json()
                .with_target(true)
                .with_current_span(true),
        )
    } else {
        Box::new(fmt::layer().with_target(true).compact())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_directive_parses() {
        assert!(EnvFilter::try_new("info,valid_assessment=debug,tower_http=info").is_ok());
    }

    #[test]
    fn default_server_directive_is_valid() {
        let server = ServerConfig::default();
        assert!(EnvFilter::try_new(&server.log_level).is_ok());
    }

    #[test]
    fn invalid_directive_is_reported() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let err = build_env_filter("valid_assessment=loud").unwrap_err();
        assert!(matches!(err, LoggingError::InvalidFilter { .. }));
    }
}
