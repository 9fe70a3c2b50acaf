//! Assessment HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{AssessmentResultResponse, ScoresRequest, SubmitAssessmentRequest};
pub use routes::assessment_routes;
