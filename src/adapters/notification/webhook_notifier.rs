//! HTTP webhook adapter for the ResultNotifier port.
//!
//! POSTs the JSON event envelope to a configured URL. When a signing secret
//! is set, the request carries
//!
//! ```text
//! X-Valid-Signature: t=<unix seconds>,v1=<hex hmac-sha256("<t>.<body>")>
//! ```
//!
//! so receivers can verify origin and reject stale deliveries.

use async_trait::async_trait;
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use std::time::Duration;

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope, Timestamp};
use crate::ports::ResultNotifier;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the HMAC signature.
pub const SIGNATURE_HEADER: &str = "X-Valid-Signature";

/// Header carrying the event type, for receivers that route before parsing.
pub const EVENT_TYPE_HEADER: &str = "X-Valid-Event-Type";

/// Webhook delivery for completed assessments.
pub struct WebhookNotifier {
    url: String,
    secret: Option<SecretString>,
    http_client: reqwest::Client,
}

impl WebhookNotifier {
    /// Creates a notifier whose requests give up after `timeout`.
    pub fn new(
        url: impl Into<String>,
        secret: Option<SecretString>,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            url: url.into(),
            secret,
            http_client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_signed(&self) -> bool {
        self.secret.is_some()
    }

    /// Signature header value for `body` sent at `timestamp`, if signing is
    /// enabled.
    pub fn signature_header(
        &self,
        timestamp: i64,
        body: &[u8],
    ) -> Result<Option<String>, DomainError> {
        let Some(secret) = &self.secret else {
            return Ok(None);
        };

        let mut mac = HmacSha256::new_from_slice(secret.expose_secret().as_bytes())
            .map_err(|e| DomainError::configuration(format!("Invalid webhook secret: {}", e)))?;
        mac.update(timestamp.to_string().as_bytes());
        mac.update(b".");
        mac.update(body);

        Ok(Some(format!(
            "t={},v1={}",
            timestamp,
            hex::encode(mac.finalize().into_bytes())
        )))
    }
}

#[async_trait]
impl ResultNotifier for WebhookNotifier {
    async fn notify(&self, envelope: EventEnvelope) -> Result<(), DomainError> {
        let body = serde_json::to_vec(&envelope).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to serialize event envelope: {}", e),
            )
        })?;

        let mut request = self
            .http_client
            .post(&self.url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(EVENT_TYPE_HEADER, envelope.event_type.as_str());

        if let Some(signature) = self.signature_header(Timestamp::now().as_unix_secs(), &body)? {
            request = request.header(SIGNATURE_HEADER, signature);
        }

        let response = request.body(body).send().await.map_err(|e| {
            DomainError::new(
                ErrorCode::NotificationFailed,
                format!("Webhook request failed: {}", e),
            )
            .with_detail("event_id", envelope.event_id.as_str())
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::new(
                ErrorCode::NotificationFailed,
                format!("Webhook receiver responded with {}", status),
            )
            .with_detail("event_id", envelope.event_id.as_str())
            .with_detail("status", status.as_u16().to_string()));
        }

        tracing::debug!(
            event_id = %envelope.event_id,
            event_type = %envelope.event_type,
            status = status.as_u16(),
            "Webhook delivered"
        );
        Ok(())
    }
}
