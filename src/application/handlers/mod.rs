//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assessment;
pub mod team;

pub use assessment::{
    ClassifyScoresHandler, ClassifyScoresQuery, GetAssessmentResultHandler,
    GetAssessmentResultQuery, SubmitAssessmentCommand, SubmitAssessmentHandler,
};
pub use team::{AssessTeamRiskHandler, AssessTeamRiskQuery, TeamMembers};
