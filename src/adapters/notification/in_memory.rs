//! In-memory ResultNotifier that records envelopes instead of sending them.
//!
//! Used in tests to assert what would have been delivered.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::ResultNotifier;

/// Records every envelope it is asked to deliver.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotifier {
    delivered: Arc<RwLock<Vec<EventEnvelope>>>,
    fail: bool,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose every delivery fails (for failure-path tests).
    pub fn failing() -> Self {
        Self {
            delivered: Arc::new(RwLock::new(Vec::new())),
            fail: true,
        }
    }

    // === Test Helpers ===

    pub async fn delivered(&self) -> Vec<EventEnvelope> {
        self.delivered.read().await.clone()
    }

    pub async fn delivered_count(&self) -> usize {
        self.delivered.read().await.len()
    }

    pub async fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.delivered
            .read()
            .await
            .iter()
            .filter(|e| e.event_type == event_type)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ResultNotifier for InMemoryNotifier {
    async fn notify(&self, envelope: EventEnvelope) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::new(
                ErrorCode::NotificationFailed,
                "In-memory notifier configured to fail",
            ));
        }
        self.delivered.write().await.push(envelope);
        Ok(())
    }
}
