//! Assessment command and query handlers.

mod classify_scores;
mod get_assessment_result;
mod submit_assessment;

pub use classify_scores::{ClassifyScoresHandler, ClassifyScoresQuery};
pub use get_assessment_result::{GetAssessmentResultHandler, GetAssessmentResultQuery};
pub use submit_assessment::{SubmitAssessmentCommand, SubmitAssessmentHandler};
