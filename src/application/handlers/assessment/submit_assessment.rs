//! SubmitAssessment - Command handler that scores, classifies, stores and
//! announces an answer sheet.

use std::sync::Arc;

use crate::domain::assessment::{AssessmentResult, Answers, Questionnaire, ScoreAggregator};
use crate::domain::foundation::{DomainError, EventEnvelope, RespondentId};
use crate::domain::persona::{PersonaCatalog, PersonaClassifier};
use crate::ports::{AssessmentResultRepository, ResultNotifier};

/// Command to submit a completed answer sheet.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentCommand {
    pub respondent: RespondentId,
    pub answers: Answers,
}

/// Handler for submitting assessments.
///
/// Notification runs on a spawned task after the result is stored. Its
/// failures are logged and never reach the caller.
pub struct SubmitAssessmentHandler {
    questionnaire: Arc<Questionnaire>,
    catalog: Arc<PersonaCatalog>,
    repository: Arc<dyn AssessmentResultRepository>,
    notifier: Option<Arc<dyn ResultNotifier>>,
}

impl SubmitAssessmentHandler {
    pub fn new(
        questionnaire: Arc<Questionnaire>,
        catalog: Arc<PersonaCatalog>,
        repository: Arc<dyn AssessmentResultRepository>,
        notifier: Option<Arc<dyn ResultNotifier>>,
    ) -> Self {
        Self {
            questionnaire,
            catalog,
            repository,
            notifier,
        }
    }

    pub async fn handle(&self, cmd: SubmitAssessmentCommand) -> Result<AssessmentResult, DomainError> {
        // 1. Score answers (rejects unknown and missing questions)
        let scores = ScoreAggregator::aggregate(&cmd.answers, &self.questionnaire)?;

        // 2. Classify
        let classifier = PersonaClassifier::new(&self.catalog);
        let result = AssessmentResult::complete(cmd.respondent, scores, &classifier)?;

        // 3. Persist
        self.repository.save(&result).await?;

        tracing::info!(
            assessment_id = %result.id,
            persona = %result.classification.primary_id(),
            balanced = result.classification.balanced,
            risk_flags = result.classification.risks.len(),
            "Assessment completed"
        );

        // 4. Announce, off the request path
        if let Some(notifier) = &self.notifier {
            self.spawn_notification(Arc::clone(notifier), &result);
        }

        Ok(result)
    }

    fn spawn_notification(&self, notifier: Arc<dyn ResultNotifier>, result: &AssessmentResult) {
        let envelope = match EventEnvelope::from_event(&result.completed_event()) {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::warn!(
                    assessment_id = %result.id,
                    error = %e,
                    "Failed to build completion event"
                );
                return;
            }
        };

        tokio::spawn(async move {
            let event_id = envelope.event_id.clone();
            let aggregate_id = envelope.aggregate_id.clone();
            if let Err(e) = notifier.notify(envelope).await {
                tracing::warn!(
                    event_id = %event_id,
                    assessment_id = %aggregate_id,
                    error = %e,
                    "Result notification failed"
                );
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::notification::InMemoryNotifier;
    use crate::adapters::storage::InMemoryResultRepository;
    use crate::domain::assessment::Dimension;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::persona::PersonaId;

    fn answers(value_for: impl Fn(Dimension) -> i64) -> Answers {
        Answers::try_from_raw(
            Questionnaire::standard()
                .questions()
                .iter()
                .map(|q| (q.id.clone(), value_for(q.dimension))),
        )
        .unwrap()
    }

    fn command(answers: Answers) -> SubmitAssessmentCommand {
        SubmitAssessmentCommand {
            respondent: RespondentId::new("dana").unwrap(),
            answers,
        }
    }

    fn handler(
        repository: &InMemoryResultRepository,
        notifier: Option<InMemoryNotifier>,
    ) -> SubmitAssessmentHandler {
        SubmitAssessmentHandler::new(
            Arc::new(Questionnaire::standard().clone()),
            Arc::new(PersonaCatalog::standard().clone()),
            Arc::new(repository.clone()),
            notifier.map(|n| Arc::new(n) as Arc<dyn ResultNotifier>),
        )
    }

    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn scores_classifies_and_stores() {
        let repository = InMemoryResultRepository::new();
        let handler = handler(&repository, None);

        // All threes -> 60 everywhere -> balanced
        let result = handler.handle(command(answers(|_| 3))).await.unwrap();

        assert_eq!(result.scores.get(Dimension::Verity).value(), 60.0);
        assert_eq!(
            result.classification.primary_id(),
            PersonaId::AdaptiveIntegrator
        );
        // I = 60 reaches the warning threshold even when balanced
        assert!(result.classification.has_risk(PersonaId::BureaucraticParalysis));
        assert_eq!(repository.find_by_id(&result.id).await.unwrap(), Some(result));
    }

    #[tokio::test]
    async fn publishes_completion_event() {
        let repository = InMemoryResultRepository::new();
        let notifier = InMemoryNotifier::new();
        let handler = handler(&repository, Some(notifier.clone()));

        let result = handler
            .handle(command(answers(|d| match d {
                Dimension::Verity | Dimension::Desire => 5,
                _ => 1,
            })))
            .await
            .unwrap();
        settle().await;

        let delivered = notifier.events_of_type("assessment.completed.v1").await;
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].aggregate_id, result.id.to_string());
        assert_eq!(delivered[0].payload["primary_persona"], "data_driven_visionary");
    }

    #[tokio::test]
    async fn notification_failure_does_not_fail_submission() {
        let repository = InMemoryResultRepository::new();
        let handler = handler(&repository, Some(InMemoryNotifier::failing()));

        let result = handler.handle(command(answers(|_| 4))).await;
        settle().await;

        assert!(result.is_ok());
        assert_eq!(repository.len().await, 1);
    }

    #[tokio::test]
    async fn incomplete_answers_are_rejected_before_storage() {
        let repository = InMemoryResultRepository::new();
        let handler = handler(&repository, None);
        let answers = Answers::try_from_raw(vec![("v1", 3), ("a1", 3)]).unwrap();

        let err = handler.handle(command(answers)).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidAnswers);
        assert!(repository.is_empty().await);
    }
}
