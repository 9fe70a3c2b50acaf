//! ResultNotifier port - outbound notification of completed assessments.
//!
//! Delivery is best-effort. Callers spawn `notify` off the request path and
//! only log its errors, so a failing receiver never fails a submission.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for telling external receivers about completed assessments.
#[async_trait]
pub trait ResultNotifier: Send + Sync {
    /// Deliver one event envelope. Not retried on failure.
    async fn notify(&self, envelope: EventEnvelope) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn ResultNotifier) {}
}
