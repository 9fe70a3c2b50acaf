//! AssessmentResult aggregate - a scored and classified answer sheet.

use serde::Serialize;

use super::{AssessmentCompleted, DimensionScores};
use crate::domain::foundation::{AssessmentId, DomainError, EventId, RespondentId, Timestamp};
use crate::domain::persona::{ClassificationResult, PersonaClassifier};

/// A completed assessment. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentResult {
    pub id: AssessmentId,
    pub respondent: RespondentId,
    pub completed_at: Timestamp,
    pub scores: DimensionScores,
    pub classification: ClassificationResult,
}

impl AssessmentResult {
    /// Classifies `scores` and stamps the result with a fresh id.
    pub fn complete(
        respondent: RespondentId,
        scores: DimensionScores,
        classifier: &PersonaClassifier<'_>,
    ) -> Result<Self, DomainError> {
        let classification = classifier.classify(&scores)?;
        Ok(Self {
            id: AssessmentId::new(),
            respondent,
            completed_at: Timestamp::now(),
            scores,
            classification,
        })
    }

    /// Builds the completion event published to receivers.
    pub fn completed_event(&self) -> AssessmentCompleted {
        AssessmentCompleted {
            event_id: EventId::new(),
            assessment_id: self.id,
            respondent: self.respondent.clone(),
            primary_persona: self.classification.primary_id(),
            balanced: self.classification.balanced,
            risks: self.classification.risks.clone(),
            scores: self.scores,
            completed_at: self.completed_at,
        }
    }
}
