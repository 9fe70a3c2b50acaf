//! GetAssessmentResult - Query handler for stored results.

use std::sync::Arc;

use crate::domain::assessment::AssessmentResult;
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode};
use crate::ports::AssessmentResultRepository;

/// Query for one stored assessment.
#[derive(Debug, Clone)]
pub struct GetAssessmentResultQuery {
    pub id: AssessmentId,
}

pub struct GetAssessmentResultHandler {
    repository: Arc<dyn AssessmentResultRepository>,
}

impl GetAssessmentResultHandler {
    pub fn new(repository: Arc<dyn AssessmentResultRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetAssessmentResultQuery,
    ) -> Result<AssessmentResult, DomainError> {
        self.repository
            .find_by_id(&query.id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::AssessmentNotFound, "Assessment not found")
                    .with_detail("assessment_id", query.id.to_string())
            })
    }
}
