//! Request and response DTOs for assessment endpoints.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::assessment::{AssessmentResult, Answers, DimensionScores};
use crate::domain::foundation::{RespondentId, ValidationError};
use crate::domain::persona::ClassificationResult;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/classify`: `{"V": .., "A": .., "L": .., "I": .., "D": ..}`.
///
/// Kept as a raw map so missing and unknown dimensions produce domain
/// validation errors instead of opaque deserialization failures.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct ScoresRequest(pub HashMap<String, f64>);

impl ScoresRequest {
    pub fn into_scores(self) -> Result<DimensionScores, ValidationError> {
        DimensionScores::from_map(&self.0)
    }
}

/// Body of `POST /api/assessments`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubmitAssessmentRequest {
    pub respondent: String,
    /// Question id -> answer (1..=5).
    pub answers: HashMap<String, i64>,
}

impl SubmitAssessmentRequest {
    pub fn into_parts(self) -> Result<(RespondentId, Answers), ValidationError> {
        let respondent = RespondentId::new(self.respondent)?;
        let answers = Answers::try_from_raw(self.answers)?;
        Ok((respondent, answers))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A stored assessment.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResultResponse {
    pub id: String,
    pub respondent: String,
    pub completed_at: String,
    pub scores: DimensionScores,
    pub classification: ClassificationResult,
}

impl From<AssessmentResult> for AssessmentResultResponse {
    fn from(result: AssessmentResult) -> Self {
        Self {
            id: result.id.to_string(),
            respondent: result.respondent.as_str().to_string(),
            completed_at: result.completed_at.to_rfc3339(),
            scores: result.scores,
            classification: result.classification,
        }
    }
}
