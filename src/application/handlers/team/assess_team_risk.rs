//! AssessTeamRisk - Query handler aggregating team-level risk.

use std::sync::Arc;

use crate::domain::assessment::DimensionScores;
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode};
use crate::domain::persona::{ClassificationResult, PersonaCatalog, PersonaClassifier};
use crate::domain::team::{TeamAggregator, TeamRiskAssessment};
use crate::ports::AssessmentResultRepository;

/// Where team members' profiles come from.
#[derive(Debug, Clone)]
pub enum TeamMembers {
    /// Previously stored assessments. Every id must exist.
    Assessments(Vec<AssessmentId>),
    /// Raw scores, classified on the fly.
    Scores(Vec<DimensionScores>),
}

#[derive(Debug, Clone)]
pub struct AssessTeamRiskQuery {
    pub members: TeamMembers,
}

pub struct AssessTeamRiskHandler {
    catalog: Arc<PersonaCatalog>,
    repository: Arc<dyn AssessmentResultRepository>,
}

impl AssessTeamRiskHandler {
    pub fn new(
        catalog: Arc<PersonaCatalog>,
        repository: Arc<dyn AssessmentResultRepository>,
    ) -> Self {
        Self {
            catalog,
            repository,
        }
    }

    pub async fn handle(&self, query: AssessTeamRiskQuery) -> Result<TeamRiskAssessment, DomainError> {
        let classifications = match query.members {
            TeamMembers::Assessments(ids) => self.stored_classifications(&ids).await?,
            TeamMembers::Scores(scores) => {
                let classifier = PersonaClassifier::new(&self.catalog);
                scores
                    .iter()
                    .map(|s| classifier.classify(s))
                    .collect::<Result<Vec<_>, _>>()?
            }
        };

        let assessment = TeamAggregator::aggregate_team_risk(&classifications)?;

        tracing::info!(
            members = assessment.member_count,
            diversity_index = assessment.diversity_index,
            team_risks = assessment.risks.len(),
            "Team risk assessed"
        );

        Ok(assessment)
    }

    async fn stored_classifications(
        &self,
        ids: &[AssessmentId],
    ) -> Result<Vec<ClassificationResult>, DomainError> {
        let results = self.repository.find_many(ids).await?;

        if results.len() != ids.len() {
            let missing = ids
                .iter()
                .find(|id| !results.iter().any(|r| r.id == **id))
                .map(ToString::to_string)
                .unwrap_or_default();
            return Err(
                DomainError::new(ErrorCode::AssessmentNotFound, "Team member assessment not found")
                    .with_detail("assessment_id", missing),
            );
        }

        Ok(results.into_iter().map(|r| r.classification).collect())
    }
}
