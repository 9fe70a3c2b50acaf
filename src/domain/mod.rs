//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors, events)
//! - `assessment` - Questionnaire, answers and dimension scoring
//! - `persona` - Pattern strengths, persona catalog, classification and risk flags
//! - `team` - Team composition, diversity and homogeneity risk

pub mod assessment;
pub mod foundation;
pub mod persona;
pub mod team;
