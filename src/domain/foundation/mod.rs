//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, events, and error types
//! that form the vocabulary of the VALID domain.

mod errors;
mod events;
mod ids;
mod percentage;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{domain_event, DomainEvent, EventEnvelope, EventId};
pub use ids::{AssessmentId, RespondentId};
pub use percentage::Percentage;
pub use timestamp::Timestamp;
