//! Assessment domain events.
//!
//! Published to external receivers (webhooks) once a result is stored.

use serde::{Deserialize, Serialize};

use super::DimensionScores;
use crate::domain::foundation::{domain_event, AssessmentId, EventId, RespondentId, Timestamp};
use crate::domain::persona::{PersonaId, RiskFlag};

/// Published when an answer sheet has been scored, classified and stored.
///
/// Carries a summary rather than the full persona text; receivers that
/// need the narrative fetch the stored result by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentCompleted {
    /// Unique event identifier for deduplication.
    pub event_id: EventId,
    pub assessment_id: AssessmentId,
    pub respondent: RespondentId,
    pub primary_persona: PersonaId,
    pub balanced: bool,
    pub risks: Vec<RiskFlag>,
    pub scores: DimensionScores,
    pub completed_at: Timestamp,
}

domain_event!(
    AssessmentCompleted,
    event_type = "assessment.completed.v1",
    aggregate_id = assessment_id,
    aggregate_type = "Assessment",
    occurred_at = completed_at,
    event_id = event_id
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainEvent, EventEnvelope};
    use crate::domain::persona::RiskSeverity;

    fn sample() -> AssessmentCompleted {
        AssessmentCompleted {
            event_id: EventId::from_string("evt-42"),
            assessment_id: AssessmentId::new(),
            respondent: RespondentId::new("team-lead").unwrap(),
            primary_persona: PersonaId::InstitutionalDiplomat,
            balanced: false,
            risks: vec![RiskFlag {
                risk_type: PersonaId::BureaucraticParalysis,
                severity: RiskSeverity::Critical,
                score: 78.0,
            }],
            scores: DimensionScores::try_new(10.0, 20.0, 15.0, 78.0, 10.0).unwrap(),
            completed_at: Timestamp::now(),
        }
    }

    #[test]
    fn routing_fields() {
        let event = sample();
        assert_eq!(event.event_type(), "assessment.completed.v1");
        assert_eq!(event.aggregate_type(), "Assessment");
        assert_eq!(event.aggregate_id(), event.assessment_id.to_string());
        assert_eq!(event.event_id().as_str(), "evt-42");
    }

    #[test]
    fn envelope_payload_restores_event() {
        let event = sample();
        let envelope = EventEnvelope::from_event(&event).unwrap();

        assert_eq!(envelope.schema_version, 1);
        assert_eq!(envelope.payload["primary_persona"], "institutional_diplomat");
        assert_eq!(envelope.payload["risks"][0]["type"], "bureaucratic_paralysis");

        let restored: AssessmentCompleted = envelope.payload_as().unwrap();
        assert_eq!(restored, event);
    }
}
