//! Notification Adapters
//!
//! Implementations of the ResultNotifier port.
//!
//! - **WebhookNotifier** - Signed HTTP POST to a configured receiver
//! - **InMemoryNotifier** - Records envelopes (development/testing)

mod in_memory;
mod webhook_notifier;

pub use in_memory::InMemoryNotifier;
pub use webhook_notifier::{WebhookNotifier, EVENT_TYPE_HEADER, SIGNATURE_HEADER};
