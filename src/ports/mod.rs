//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AssessmentResultRepository` - Storage for completed assessments
//! - `ResultNotifier` - Outbound delivery of `assessment.completed` events

mod assessment_result_repository;
mod result_notifier;

pub use assessment_result_repository::AssessmentResultRepository;
pub use result_notifier::ResultNotifier;
