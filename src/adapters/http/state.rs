//! Shared application state for HTTP handlers.

use std::sync::Arc;

use crate::application::handlers::{
    AssessTeamRiskHandler, ClassifyScoresHandler, GetAssessmentResultHandler,
    SubmitAssessmentHandler,
};
use crate::domain::assessment::Questionnaire;
use crate::domain::persona::PersonaCatalog;
use crate::ports::{AssessmentResultRepository, ResultNotifier};

/// Shared application state containing all dependencies.
///
/// Cloned for each request; every dependency is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub questionnaire: Arc<Questionnaire>,
    pub catalog: Arc<PersonaCatalog>,
    pub repository: Arc<dyn AssessmentResultRepository>,
    pub notifier: Option<Arc<dyn ResultNotifier>>,
}

impl AppState {
    pub fn new(
        questionnaire: Questionnaire,
        catalog: PersonaCatalog,
        repository: Arc<dyn AssessmentResultRepository>,
        notifier: Option<Arc<dyn ResultNotifier>>,
    ) -> Self {
        Self {
            questionnaire: Arc::new(questionnaire),
            catalog: Arc::new(catalog),
            repository,
            notifier,
        }
    }

    /// Create handlers on demand from the shared state.
    pub fn submit_assessment_handler(&self) -> SubmitAssessmentHandler {
        SubmitAssessmentHandler::new(
            self.questionnaire.clone(),
            self.catalog.clone(),
            self.repository.clone(),
            self.notifier.clone(),
        )
    }

    pub fn classify_scores_handler(&self) -> ClassifyScoresHandler {
        ClassifyScoresHandler::new(self.catalog.clone())
    }

    pub fn get_assessment_result_handler(&self) -> GetAssessmentResultHandler {
        GetAssessmentResultHandler::new(self.repository.clone())
    }

    pub fn assess_team_risk_handler(&self) -> AssessTeamRiskHandler {
        AssessTeamRiskHandler::new(self.catalog.clone(), self.repository.clone())
    }
}
